// Command flows: each one validates its arguments, talks to the API client
// and reports what it did. A failing artifact aborts the whole run.

use crate::api::ApiClient;
use crate::artifacts::{collect_artifacts, Artifact, RepoPath};
use crate::config::Config;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Component, Path, PathBuf};

/// Upload everything `local` resolves to under the `repo:path` target.
/// Returns the artifacts that were uploaded (or would be, on a dry run).
pub fn upload(config: &Config, local: &str, repo_path: &str) -> Result<Vec<Artifact>> {
    let target = RepoPath::parse(repo_path)?.to_target();
    let artifacts = collect_artifacts(local, &target)?;
    tracing::info!(count = artifacts.len(), dry_run = config.dry_run, "resolved artifacts");

    let api = ApiClient::new(config)?;
    let pb = progress(artifacts.len(), "Uploading")?;
    for artifact in &artifacts {
        let url = format!("{}{}", api.base_url(), artifact.target_path);
        if config.dry_run {
            pb.suspend(|| println!("[Dry run] Uploading artifact: {}", url));
        } else {
            pb.suspend(|| println!("Uploading artifact: {}", url));
            api.put_file(&artifact.local_path, &artifact.target_path)?;
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let verb = if config.dry_run { "would be uploaded" } else { "uploaded" };
    println!("{} artifact(s) {}.", artifacts.len(), verb);
    Ok(artifacts)
}

/// Download every file matching the `repo:path` pattern into `dest_root`.
/// Returns the local paths written.
pub fn download(config: &Config, repo_path: &str, dest_root: &Path) -> Result<Vec<PathBuf>> {
    let pattern = RepoPath::parse(repo_path)?;
    let api = ApiClient::new(config)?;

    let files = api.search_pattern(pattern.as_pattern())?;
    tracing::info!(count = files.len(), pattern = pattern.as_pattern(), "pattern search done");

    let pb = progress(files.len(), "Downloading")?;
    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        let dest = local_destination(dest_root, file, config.flat)?;
        pb.suspend(|| println!("Downloading {}/{}", pattern.repo, file));
        api.download_file(&pattern.repo, file, &dest)?;
        written.push(dest);
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("{} file(s) downloaded.", written.len());
    Ok(written)
}

/// Where a repository file lands locally: its full repository path under
/// `root`, or just its file name when `flat`. Paths that would leave
/// `root` or name no file are rejected.
pub fn local_destination(root: &Path, file: &str, flat: bool) -> Result<PathBuf> {
    let relative = Path::new(file.trim_start_matches('/'));
    if let Some(bad) = relative
        .components()
        .find(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
    {
        anyhow::bail!(
            "Refusing to download '{}': path component '{}' escapes {}",
            file,
            bad.as_os_str().to_string_lossy(),
            root.display()
        );
    }

    let Some(name) = relative.file_name().filter(|_| !file.ends_with('/')) else {
        anyhow::bail!("Refusing to download '{}': no file name", file);
    };
    if flat {
        Ok(root.join(name))
    } else {
        Ok(root.join(relative))
    }
}

fn progress(len: usize, msg: &'static str) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(ProgressStyle::with_template("{spinner} {msg} [{bar:30}] {pos}/{len}")?);
    pb.set_message(msg);
    Ok(pb)
}
