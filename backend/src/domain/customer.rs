//! Customer data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registered customer record.
///
/// Wire names follow the upstream contract: `Id`, `Nama`, `Address`. The id
/// is caller-supplied and unique in storage (the `customer` table primary
/// key); `nama` carries the customer's name as captured at registration.
/// Records are written once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
#[serde(deny_unknown_fields)]
pub struct Customer {
    /// Stable caller-supplied identifier.
    #[schema(example = "C001")]
    pub id: String,
    /// Customer name.
    #[schema(example = "Name One")]
    pub nama: String,
    /// Postal address.
    #[schema(example = "Dummy One")]
    pub address: String,
}
