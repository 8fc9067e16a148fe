use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtgridError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("引数が不正です: {0}")]
    InvalidArgument(String),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    HttpClient(String),

    #[error("カタログ取得エラー: {0}")]
    Fetch(#[from] artgrid_common::FetchError),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] artgrid_common::Error),
}

impl From<dialoguer::Error> for ArtgridError {
    fn from(e: dialoguer::Error) -> Self {
        ArtgridError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ArtgridError>;
