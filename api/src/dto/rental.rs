use serde::Deserialize;

use rw_core::domain::entities::rental::CarId;

/// Rental creation request body.
///
/// There is no `userId` field on purpose: the owner is always taken from
/// the caller's verified identity, never from the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    pub car_id: Option<CarId>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
