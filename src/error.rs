use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to render module template: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("invalid path data: {0}")]
    Path(#[from] kurbo::SvgParseError),

    #[error("failed to parse svg: {0}")]
    Svg(#[from] usvg::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
