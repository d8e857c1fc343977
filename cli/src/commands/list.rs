use super::{AppContext, ArcCommand};
use crate::format::OutputFormat;
use arcmarks::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommand {
    pub format: Option<String>,
    pub nc: bool,
}

impl ListCommand {
    fn output_format(&self) -> OutputFormat {
        self.format
            .as_deref()
            .map(OutputFormat::from_string)
            .unwrap_or(OutputFormat::Colored)
    }
}

impl ArcCommand for ListCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let records = ctx.store.load()?;
        let format = self.output_format();

        if records.is_empty() && format != OutputFormat::Json {
            eprintln!("No bookmarks to display.");
            return Ok(());
        }

        format.print_bookmarks(&records, self.nc);
        Ok(())
    }
}
