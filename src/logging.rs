use crate::err;
use crate::result::PlanarResult;
use tracing::Level;

pub fn init_logging(level: Level) -> PlanarResult<()> {
    tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_max_level(level)
        .try_init()
        .map_err(|error| err!("Failed to install logging subscriber: {}", error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assertables::assert_contains;

    #[test]
    fn test_init_logging_only_once() {
        let _ = init_logging(Level::TRACE);
        let error = init_logging(Level::DEBUG).unwrap_err();
        assert_contains!(error.to_string(), "Failed to install logging subscriber");
    }
}
