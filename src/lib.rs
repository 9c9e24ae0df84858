// Library root
// ------------
// This crate exposes the pieces of the `art` CLI as a library so they can
// be tested without spawning the binary.
//
// Module responsibilities:
// - `cli`: clap definitions of the commands and their flags.
// - `config`: the `Config` struct built from the flags.
// - `artifacts`: `repo:path` parsing and local path to target resolution.
// - `api`: blocking HTTP calls against the Artifactory REST API.
// - `commands`: the `upload` and `download` flows.
pub mod api;
pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod config;
