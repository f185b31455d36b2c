//! The customer entity and its partial-update view

use serde::{Deserialize, Deserializer, Serialize};

/// A row of the `customer` table as it travels over the wire.
///
/// Every field defaults to its zero value when missing from a request body and is
/// omitted from responses while it holds that zero value, so the empty customer
/// serializes to `{}`. A JSON `null` decodes to the zero value as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "mysql", derive(sqlx::FromRow))]
pub struct Customer {
    /// Assigned by the store on insert
    #[serde(
        default,
        deserialize_with = "null_as_zero",
        skip_serializing_if = "is_zero"
    )]
    pub id: i64,

    #[serde(
        default,
        deserialize_with = "null_as_zero",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,

    #[serde(
        default,
        deserialize_with = "null_as_zero",
        skip_serializing_if = "is_zero"
    )]
    pub age: i64,

    #[serde(
        default,
        deserialize_with = "null_as_zero",
        skip_serializing_if = "is_zero"
    )]
    pub salary: i64,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Customer {
    /// Create a customer that has not been persisted yet (id 0)
    pub fn new(name: impl Into<String>, age: i64, salary: i64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            age,
            salary,
        }
    }

    /// Same customer carrying the given id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// The fields a partial update will write.
///
/// `None` means "leave the column alone". Converting from a [`Customer`] treats an
/// empty name and a zero age or salary as absent, which is how a merged PATCH body
/// is interpreted: a client cannot use PATCH to set `age` or `salary` to `0` or to
/// clear `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub salary: Option<i64>,
}

impl CustomerPatch {
    /// True when no column would be written
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.salary.is_none()
    }

    /// Apply the present fields onto an existing customer
    pub fn apply_to(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.clone();
        }
        if let Some(age) = self.age {
            customer.age = age;
        }
        if let Some(salary) = self.salary {
            customer.salary = salary;
        }
    }
}

impl From<&Customer> for CustomerPatch {
    fn from(customer: &Customer) -> Self {
        Self {
            name: Some(customer.name.clone()).filter(|name| !name.is_empty()),
            age: Some(customer.age).filter(|age| *age != 0),
            salary: Some(customer.salary).filter(|salary| *salary != 0),
        }
    }
}
