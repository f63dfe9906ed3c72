use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub board_file: PathBuf,
}

impl CliConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let board_file = std::env::var("BOARD_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("board.json"));

        Self { board_file }
    }
}
