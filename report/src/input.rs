use analysis::event::Event;

/// Decodes a JSON array of rows, or rows as whitespace separated JSON values.
pub fn parse_events(buf: &[u8]) -> Result<Vec<Event>, serde_json::Error> {
    let first = buf.iter().find(|b| !b.is_ascii_whitespace());

    match first {
        None => Ok(Vec::new()),
        Some(b'[') => serde_json::from_slice(buf),
        Some(_) => serde_json::Deserializer::from_slice(buf)
            .into_iter::<Event>()
            .collect(),
    }
}

#[tracing::instrument]
pub fn load_events(path: &std::path::Path) -> Result<Vec<Event>, crate::ReportError> {
    let file = std::fs::File::open(path)?;
    if file.metadata()?.len() == 0 {
        tracing::warn!("Empty snapshot");
        return Ok(Vec::new());
    }

    let mmap = unsafe { memmap2::MmapOptions::new().map(&file)? };

    let events = parse_events(&mmap)?;
    tracing::info!("Loaded {} rows", events.len());

    Ok(events)
}
