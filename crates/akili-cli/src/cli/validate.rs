use crate::cli::opt::Validate;
use akili_config::curriculum;
use akili_model::track::LearningTrack;
use anyhow::{Error, Result, anyhow};
use std::collections::HashSet;

pub(crate) async fn validate(opt: Validate) -> Result<(), Error> {
    let mut tracks = Vec::new();
    for path in &opt.paths {
        let content = tokio::fs::read(path).await?;
        tracks.push(curriculum::load(&content)?);
    }

    let mut seen: HashSet<LearningTrack> = HashSet::new();
    let mut warnings = Vec::new();
    for track in &tracks {
        if !seen.insert(track.track) {
            return Err(anyhow!("Track {} is defined more than once", track.track));
        }
        warnings.extend(
            track
                .validate()?
                .into_iter()
                .map(|warning| format!("{}: {warning}", track.track)),
        );
    }

    let names: Vec<String> = tracks.iter().map(|track| track.track.to_string()).collect();

    for warning in &warnings {
        eprintln!("{warning}");
    }
    if opt.strict && !warnings.is_empty() {
        return Err(anyhow!("Curriculum for the tracks {names:?} has warnings"));
    }
    println!("Curriculum for the tracks {names:?} is ok 👌");
    Ok(())
}
