use anyhow::{Context, Result};

/// Runtime configuration, read from the environment with documented defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_pool_size: u32,
    pub database_url: Option<String>,
    pub run_migrations: bool,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn init() -> Result<Self> {
        let port = env_or("PORT", "3000")
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_pool_size = env_or("DB_POOL_SIZE", "10")
            .parse::<u32>()
            .context("DB_POOL_SIZE must be a valid u32 integer")?;

        let run_migrations = match env_or("RUN_MIGRATIONS", "true").as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            other => {
                return Err(anyhow::anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        Ok(Self {
            port,
            db_host: env_or("DB_HOST", "localhost"),
            db_user: env_or("DB_USER", "root"),
            db_password: env_or("DB_PASSWORD", ""),
            db_name: env_or("DB_NAME", "product_db"),
            db_pool_size,
            database_url: std::env::var("DATABASE_URL").ok(),
            run_migrations,
        })
    }

    /// Connection string for the catalog store. `DATABASE_URL` wins when set,
    /// otherwise the URL is composed from the individual `DB_*` parts.
    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!(
                "mysql://{}:{}@{}/{}",
                self.db_user, self.db_password, self.db_host, self.db_name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            port: 3000,
            db_host: "localhost".to_string(),
            db_user: "root".to_string(),
            db_password: String::new(),
            db_name: "product_db".to_string(),
            db_pool_size: 10,
            database_url: None,
            run_migrations: true,
        }
    }

    #[test]
    fn composes_url_from_parts() {
        let config = base_config();
        assert_eq!(config.database_url(), "mysql://root:@localhost/product_db");
    }

    #[test]
    fn explicit_database_url_takes_precedence() {
        let mut config = base_config();
        config.database_url = Some("mysql://catalog:secret@db:3306/catalog".to_string());
        assert_eq!(
            config.database_url(),
            "mysql://catalog:secret@db:3306/catalog"
        );
    }
}
