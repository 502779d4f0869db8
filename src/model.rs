//! Country record as stored and as serialized over the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the `country` table. `country_id` and `last_update` are store-assigned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Country {
    pub country_id: i32,
    pub country: String,
    pub last_update: DateTime<Utc>,
}

/// Body of `POST /api/countries`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewCountry {
    pub country: String,
}
