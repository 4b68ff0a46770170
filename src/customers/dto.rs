use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::customers::domain::model::CustomerEntity;
use crate::utils::date::serializer;

// CustomerDto is a data transfer object for Customer service
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CustomerDto {
    pub customer_id: String,
    pub version: i64,
    pub name: String,
    pub phone: i64,
    pub address: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl CustomerDto {
    pub fn new(name: &str, phone: i64, address: &str) -> Self {
        Self {
            customer_id: Uuid::new_v4().to_string(),
            version: 0,
            name: name.to_string(),
            phone,
            address: address.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for CustomerDto {
    fn id(&self) -> String {
        self.customer_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl From<&CustomerEntity> for CustomerDto {
    fn from(other: &CustomerEntity) -> Self {
        Self {
            customer_id: other.customer_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            phone: other.phone,
            address: other.address.to_string(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&CustomerDto> for CustomerEntity {
    fn from(other: &CustomerDto) -> Self {
        Self {
            customer_id: other.customer_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            phone: other.phone,
            address: other.address.to_string(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::customers::domain::model::CustomerEntity;
    use crate::customers::dto::CustomerDto;

    #[tokio::test]
    async fn test_should_build_customer() {
        let customer = CustomerDto::new("Grace", 5550000, "1 Harbor Rd");
        assert_eq!(customer.customer_id, customer.id());
        assert_eq!(0, customer.version());
        let entity = CustomerEntity::from(&customer);
        assert_eq!(customer, CustomerDto::from(&entity));
    }
}
