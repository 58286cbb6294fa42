pub mod menu;
pub mod vocabulary;

pub use menu::MenuCommands;
pub use vocabulary::VocabularyCommands;
