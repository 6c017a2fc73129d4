use serde::Serialize;
use ts_rs::TS;

// 健康检查响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub status: String, // ok / degraded
    pub version: String,
    pub environment: String,
    pub uptime_seconds: i64,
    pub storage_type: String,
    pub database: String, // ok / error
}
