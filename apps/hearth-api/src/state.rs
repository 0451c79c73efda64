use std::sync::Arc;

use hearth_service::HearthService;
use hearth_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<HearthService>,
}
impl AppState {
	pub async fn new(config: hearth_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = HearthService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}

	pub fn from_service(service: HearthService) -> Self {
		Self { service: Arc::new(service) }
	}
}
