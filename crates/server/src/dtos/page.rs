use database::config::SearchConfig;
use models::page::PageRequest;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index
    pub page: Option<u64>,

    /// Page size, falls back to the configured default
    pub size: Option<u64>,
}

impl PageParams {
    pub fn request(&self, config: &SearchConfig) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(config.default_page_size),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults_come_from_config() {
        let config = SearchConfig {
            default_page_size: 15,
            ..SearchConfig::default()
        };

        assert_eq!(
            PageParams::default().request(&config),
            PageRequest::new(0, 15)
        );
        assert_eq!(
            PageParams {
                page: Some(2),
                size: Some(5)
            }
            .request(&config),
            PageRequest::new(2, 5)
        );
    }
}
