use std::ffi::OsStr;
use std::path::Path;

use anyhow::{Context, Result};
use dc_core::ConverterConfig;
use dc_mapping::convert::convert_file;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Whether `event` means the watched file `file_name` was written.
///
/// Only create/modify events count; removals and access events are ignored,
/// as are events on sibling files of the watched directory.
#[must_use]
pub fn is_input_event(event: &Event, file_name: &OsStr) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event.paths.iter().any(|p| p.file_name() == Some(file_name))
}

/// Lance un watcher sur le dossier du fichier source.
///
/// Each create/modify event touching `input` sends `()` on the returned
/// channel. The parent directory is watched rather than the file itself so
/// that editors which save by renaming a temporary file are still seen.
/// The watcher must stay alive for as long as events are wanted.
///
/// # Errors
/// Returns an error if `input` has no file name, or if the watcher cannot be
/// created or the directory cannot be watched.
pub fn spawn_input_watcher(input: &Path) -> Result<(RecommendedWatcher, flume::Receiver<()>)> {
    let (tx, rx) = flume::unbounded();
    let file_name = input
        .file_name()
        .with_context(|| format!("Pas de nom de fichier : {}", input.display()))?
        .to_os_string();
    let dir = match input.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            if is_input_event(&event, &file_name) {
                // Receiver gone means the watch loop ended; nothing left to notify.
                let _ = tx.send(());
            }
        }
        Err(e) => log::warn!("Erreur du watcher : {e}"),
    })?;

    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Impossible de surveiller {}", dir.display()))?;
    Ok((watcher, rx))
}

/// One reconversion triggered by the watcher.
///
/// Failures are logged, never returned: a broken save must not end the watch.
/// Returns whether the output was rewritten.
pub fn reconvert(input: &Path, output: &Path, config: &ConverterConfig) -> bool {
    match convert_file(input, output, config) {
        Ok(report) => {
            println!("JSON régénéré : {} ({report})", output.display());
            true
        }
        Err(e) => {
            log::warn!("Conversion échouée : {e:#}");
            false
        }
    }
}

/// Reconvertit `input` à chaque modification, jusqu'à interruption du process.
///
/// # Errors
/// Returns an error only if the watcher cannot be started.
pub fn watch_and_convert(input: &Path, output: &Path, config: &ConverterConfig) -> Result<()> {
    let (_watcher, rx) = spawn_input_watcher(input)?;
    println!("Surveillance de {} (Ctrl+C pour quitter)", input.display());

    while rx.recv().is_ok() {
        // Une sauvegarde produit souvent plusieurs événements.
        while rx.try_recv().is_ok() {}
        reconvert(input, output, config);
    }
    Ok(())
}
