mod error;
mod types;

pub use error::{Error, Result};
pub use types::{ChatProviderConfig, Config, Listings, Postgres, Providers, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}

	let chat = &cfg.providers.chat;

	if chat.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.chat.api_base must be non-empty.".to_string(),
		});
	}
	if chat.model.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.chat.model must be non-empty.".to_string(),
		});
	}
	if chat.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.chat.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if chat.max_tokens == 0 {
		return Err(Error::Validation {
			message: "providers.chat.max_tokens must be greater than zero.".to_string(),
		});
	}
	if !chat.temperature.is_finite() {
		return Err(Error::Validation {
			message: "providers.chat.temperature must be a finite number.".to_string(),
		});
	}
	if !(0.0..=2.0).contains(&chat.temperature) {
		return Err(Error::Validation {
			message: "providers.chat.temperature must be in the range 0.0-2.0.".to_string(),
		});
	}

	if cfg.listings.featured_count == 0 {
		return Err(Error::Validation {
			message: "listings.featured_count must be greater than zero.".to_string(),
		});
	}
	if cfg.listings.latest_count == 0 {
		return Err(Error::Validation {
			message: "listings.latest_count must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let key = cfg.providers.chat.api_key.trim();

	if key.len() != cfg.providers.chat.api_key.len() {
		cfg.providers.chat.api_key = key.to_string();
	}
}
