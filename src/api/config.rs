use std::env;

#[derive(Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub admin_token: String,
    pub data_path: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .unwrap_or(5000);

        let admin_token = env::var("ADMIN_TOKEN").unwrap_or_else(|_| {
            tracing::warn!("ADMIN_TOKEN not set in environment, using default");
            "secret-token".to_string()
        });

        let data_path =
            env::var("EXPENSES_DATA").unwrap_or_else(|_| "data/expenses.json".to_string());

        Self {
            port,
            admin_token,
            data_path,
        }
    }
}
