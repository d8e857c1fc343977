use crate::error::Result;
use log::debug;

/// Open `url` with the system's default browser
pub fn open_url(url: &str) -> Result<()> {
    debug!("Opening {}", url);
    open::that(url)?;
    Ok(())
}
