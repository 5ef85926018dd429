use crate::domain::model::Output;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn square_delay(&self) -> Duration;
}

#[async_trait]
pub trait Operation: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self) -> Result<Output>;
}
