use clap::Subcommand;
use quranreview_core::SECTIONS;

#[derive(Subcommand)]
pub enum SectionAction {
    /// List sections available for new items
    List,
}

pub fn run(action: SectionAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SectionAction::List => {
            println!("{}", serde_json::to_string_pretty(&SECTIONS)?);
        }
    }
    Ok(())
}
