// Resolution of local files into upload targets.
//
// A local path argument is either a plain file, a plain directory, or a
// directory followed by a regular expression (`dist/(.*)\.jar`). The part
// before the first `(` is the root that gets walked; every file under it is
// matched against the whole argument and `$N` placeholders in the target
// are filled from the capture groups.

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A local file paired with the repository path it is uploaded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub local_path: PathBuf,
    pub target_path: String,
}

/// A `repo:path` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    pub repo: String,
    raw: String,
}

impl RepoPath {
    pub fn parse(arg: &str) -> Result<Self> {
        let Some((repo, _)) = arg.split_once(':') else {
            anyhow::bail!("Invalid repo path format: '{}'. Should be [repo:path].", arg);
        };
        Ok(RepoPath {
            repo: repo.to_string(),
            raw: arg.to_string(),
        })
    }

    /// The argument as typed, used as the search pattern.
    pub fn as_pattern(&self) -> &str {
        &self.raw
    }

    /// Repository-relative URL path: every `:` becomes `/`.
    pub fn to_target(&self) -> String {
        self.raw.replace(':', "/")
    }
}

/// Prefix of `local` up to the first `(`, i.e. where the regex part starts.
pub fn root_path(local: &str) -> &str {
    match local.find('(') {
        Some(index) => &local[..index],
        None => local,
    }
}

/// Replace `$1..$N` in `template` with the matching capture groups.
/// Higher indexes go first so `$10` is not eaten by `$1`. Groups that
/// did not participate in the match substitute as empty.
pub fn substitute_groups(template: &str, caps: &Captures) -> String {
    let mut target = template.to_string();
    for i in (1..caps.len()).rev() {
        let group = caps.get(i).map_or("", |m| m.as_str());
        target = target.replace(&format!("${}", i), group);
    }
    target
}

/// Collect the artifacts described by a local path argument and a target
/// template (already in `repo/path` form).
pub fn collect_artifacts(local: &str, target: &str) -> Result<Vec<Artifact>> {
    let root = root_path(local);
    let root_dir = Path::new(root);
    if !root_dir.exists() {
        anyhow::bail!("Path does not exist: {}", root);
    }

    if !root_dir.is_dir() {
        return Ok(vec![artifact(root_dir.to_path_buf(), target.to_string())]);
    }

    let regex = Regex::new(local).with_context(|| format!("Invalid local path pattern '{}'", local))?;
    let files = list_files(root_dir)?;
    tracing::debug!(root, count = files.len(), "listed local files");

    let mut artifacts = Vec::new();
    for file in files {
        let target_path = match regex.captures(&file.to_string_lossy()) {
            Some(caps) => substitute_groups(target, &caps),
            None => {
                tracing::debug!(path = %file.display(), "skipping unmatched file");
                continue;
            }
        };
        artifacts.push(artifact(file, target_path));
    }
    Ok(artifacts)
}

fn artifact(local_path: PathBuf, mut target_path: String) -> Artifact {
    if target_path.ends_with('/') {
        if let Some(name) = local_path.file_name() {
            target_path.push_str(&name.to_string_lossy());
        }
    }
    Artifact {
        local_path,
        target_path,
    }
}

/// All regular files below `root`, sorted by path.
fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to read directory {}", root.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
