use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub salon: SalonConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: String,
    pub session_ttl_minutes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:3009".to_string(),
            session_ttl_minutes: 30,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SalonConfig {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
    pub timezone: String,
}

impl Default for SalonConfig {
    fn default() -> Self {
        Self {
            name: "Salon Beauty".to_string(),
            address: "10 Primernaya St, Moscow".to_string(),
            phone: "+7 (999) 000-00-00".to_string(),
            hours: "Daily 9:00 - 21:00".to_string(),
            timezone: "Europe/Moscow".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct StaffMember {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    /// Price in whole rubles.
    pub price: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// "HH:MM", 24h.
    pub time: String,
    pub available: bool,
}
