//! Request entities for the carrier API lookups.
//!
//! # Design
//! Every entity is a flat record of optional fields following one accessor
//! convention: a getter per field, and a setter that validates the new value
//! before assigning it and hands the entity back for chaining. Passing `None`
//! to any setter clears the field and always succeeds. A setter that fails
//! leaves the old value in place — assignment happens only after the bound
//! validator accepts.
//!
//! Entities carry no cross-field logic. Whether `latitude_north` actually
//! lies north of `latitude_south` is the server's business; the client only
//! guarantees each field individually matches the carrier's wire format.

use crate::error::ValidationError;
use crate::types::DeliveryOption;
use crate::validate::{self, CoordinateInput, IntegerInput};

/// North-west corner of a bounding box, kept as raw strings.
///
/// This pair is a leaf record used when assembling area queries by hand;
/// no format validation is applied to the two fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinatesNorthWest {
    latitude: Option<String>,
    longitude: Option<String>,
}

impl CoordinatesNorthWest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latitude(&self) -> Option<&str> {
        self.latitude.as_deref()
    }

    pub fn set_latitude(&mut self, value: Option<&str>) -> &mut Self {
        self.latitude = value.map(str::to_string);
        self
    }

    pub fn longitude(&self) -> Option<&str> {
        self.longitude.as_deref()
    }

    pub fn set_longitude(&mut self, value: Option<&str>) -> &mut Self {
        self.longitude = value.map(str::to_string);
        self
    }
}

/// South-east corner of a bounding box, kept as raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinatesSouthEast {
    latitude: Option<String>,
    longitude: Option<String>,
}

impl CoordinatesSouthEast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latitude(&self) -> Option<&str> {
        self.latitude.as_deref()
    }

    pub fn set_latitude(&mut self, value: Option<&str>) -> &mut Self {
        self.latitude = value.map(str::to_string);
        self
    }

    pub fn longitude(&self) -> Option<&str> {
        self.longitude.as_deref()
    }

    pub fn set_longitude(&mut self, value: Option<&str>) -> &mut Self {
        self.longitude = value.map(str::to_string);
        self
    }
}

/// Query for pickup locations nearest to a street address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindNearestLocationsRequest {
    country_code: Option<String>,
    postal_code: Option<String>,
    city: Option<String>,
    street: Option<String>,
    house_number: Option<i64>,
    delivery_date: Option<String>,
    opening_time: Option<String>,
    delivery_options: Option<Vec<DeliveryOption>>,
}

impl FindNearestLocationsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    /// Destination country, `NL` or `BE`.
    pub fn set_country_code(&mut self, value: Option<&str>) -> Result<&mut Self, ValidationError> {
        if let Some(v) = value {
            validate::country_code_nl_be("country_code", v)?;
            self.country_code = Some(v.to_string());
        } else {
            self.country_code = None;
        }
        Ok(self)
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    pub fn set_postal_code(&mut self, value: Option<&str>) -> Result<&mut Self, ValidationError> {
        if let Some(v) = value {
            validate::postcode("postal_code", v)?;
            self.postal_code = Some(v.to_string());
        } else {
            self.postal_code = None;
        }
        Ok(self)
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn set_city(&mut self, value: Option<&str>) -> Result<&mut Self, ValidationError> {
        if let Some(v) = value {
            validate::city("city", v)?;
            self.city = Some(v.to_string());
        } else {
            self.city = None;
        }
        Ok(self)
    }

    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    pub fn set_street(&mut self, value: Option<&str>) -> Result<&mut Self, ValidationError> {
        if let Some(v) = value {
            validate::street("street", v)?;
            self.street = Some(v.to_string());
        } else {
            self.street = None;
        }
        Ok(self)
    }

    pub fn house_number(&self) -> Option<i64> {
        self.house_number
    }

    /// Accepts a native integer or its digit-string spelling, at most 10 digits.
    pub fn set_house_number(
        &mut self,
        value: Option<impl IntegerInput>,
    ) -> Result<&mut Self, ValidationError> {
        self.house_number = match value {
            Some(v) => Some(validate::integer("house_number", v)?),
            None => None,
        };
        Ok(self)
    }

    pub fn delivery_date(&self) -> Option<&str> {
        self.delivery_date.as_deref()
    }

    /// `DD-MM-YYYY`; the check is pattern-only, not calendar-aware.
    pub fn set_delivery_date(&mut self, value: Option<&str>) -> Result<&mut Self, ValidationError> {
        if let Some(v) = value {
            validate::date("delivery_date", v)?;
            self.delivery_date = Some(v.to_string());
        } else {
            self.delivery_date = None;
        }
        Ok(self)
    }

    pub fn opening_time(&self) -> Option<&str> {
        self.opening_time.as_deref()
    }

    /// `HH:MM:SS`, hour 00-23.
    pub fn set_opening_time(&mut self, value: Option<&str>) -> Result<&mut Self, ValidationError> {
        if let Some(v) = value {
            validate::time("opening_time", v)?;
            self.opening_time = Some(v.to_string());
        } else {
            self.opening_time = None;
        }
        Ok(self)
    }

    pub fn delivery_options(&self) -> Option<&[DeliveryOption]> {
        self.delivery_options.as_deref()
    }

    pub fn set_delivery_options(&mut self, value: Option<Vec<DeliveryOption>>) -> &mut Self {
        self.delivery_options = value;
        self
    }
}

/// Query for pickup locations inside a bounding box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindLocationsInAreaRequest {
    latitude_north: Option<f64>,
    longitude_west: Option<f64>,
    latitude_south: Option<f64>,
    longitude_east: Option<f64>,
    country_code: Option<String>,
    delivery_options: Option<Vec<DeliveryOption>>,
    delivery_date: Option<String>,
    opening_time: Option<String>,
}

impl FindLocationsInAreaRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latitude_north(&self) -> Option<f64> {
        self.latitude_north
    }

    /// Accepts an `f64` or a decimal-degree string, which is coerced.
    pub fn set_latitude_north(
        &mut self,
        value: Option<impl CoordinateInput>,
    ) -> Result<&mut Self, ValidationError> {
        self.latitude_north = match value {
            Some(v) => Some(validate::coordinate("latitude_north", v)?),
            None => None,
        };
        Ok(self)
    }

    pub fn longitude_west(&self) -> Option<f64> {
        self.longitude_west
    }

    pub fn set_longitude_west(
        &mut self,
        value: Option<impl CoordinateInput>,
    ) -> Result<&mut Self, ValidationError> {
        self.longitude_west = match value {
            Some(v) => Some(validate::coordinate("longitude_west", v)?),
            None => None,
        };
        Ok(self)
    }

    pub fn latitude_south(&self) -> Option<f64> {
        self.latitude_south
    }

    pub fn set_latitude_south(
        &mut self,
        value: Option<impl CoordinateInput>,
    ) -> Result<&mut Self, ValidationError> {
        self.latitude_south = match value {
            Some(v) => Some(validate::coordinate("latitude_south", v)?),
            None => None,
        };
        Ok(self)
    }

    pub fn longitude_east(&self) -> Option<f64> {
        self.longitude_east
    }

    pub fn set_longitude_east(
        &mut self,
        value: Option<impl CoordinateInput>,
    ) -> Result<&mut Self, ValidationError> {
        self.longitude_east = match value {
            Some(v) => Some(validate::coordinate("longitude_east", v)?),
            None => None,
        };
        Ok(self)
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn set_country_code(&mut self, value: Option<&str>) -> Result<&mut Self, ValidationError> {
        if let Some(v) = value {
            validate::country_code_nl_be("country_code", v)?;
            self.country_code = Some(v.to_string());
        } else {
            self.country_code = None;
        }
        Ok(self)
    }

    pub fn delivery_options(&self) -> Option<&[DeliveryOption]> {
        self.delivery_options.as_deref()
    }

    pub fn set_delivery_options(&mut self, value: Option<Vec<DeliveryOption>>) -> &mut Self {
        self.delivery_options = value;
        self
    }

    pub fn delivery_date(&self) -> Option<&str> {
        self.delivery_date.as_deref()
    }

    pub fn set_delivery_date(&mut self, value: Option<&str>) -> Result<&mut Self, ValidationError> {
        if let Some(v) = value {
            validate::date("delivery_date", v)?;
            self.delivery_date = Some(v.to_string());
        } else {
            self.delivery_date = None;
        }
        Ok(self)
    }

    pub fn opening_time(&self) -> Option<&str> {
        self.opening_time.as_deref()
    }

    pub fn set_opening_time(&mut self, value: Option<&str>) -> Result<&mut Self, ValidationError> {
        if let Some(v) = value {
            validate::time("opening_time", v)?;
            self.opening_time = Some(v.to_string());
        } else {
            self.opening_time = None;
        }
        Ok(self)
    }
}

/// Query for shipments whose status changed inside a period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetrieveUpdatedShipmentsRequest {
    start_date: Option<String>,
    end_date: Option<String>,
}

impl RetrieveUpdatedShipmentsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }

    /// `DD-MM-YYYY HH:MM:SS`.
    pub fn set_start_date(&mut self, value: Option<&str>) -> Result<&mut Self, ValidationError> {
        if let Some(v) = value {
            validate::date_time("start_date", v)?;
            self.start_date = Some(v.to_string());
        } else {
            self.start_date = None;
        }
        Ok(self)
    }

    pub fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }

    pub fn set_end_date(&mut self, value: Option<&str>) -> Result<&mut Self, ValidationError> {
        if let Some(v) = value {
            validate::date_time("end_date", v)?;
            self.end_date = Some(v.to_string());
        } else {
            self.end_date = None;
        }
        Ok(self)
    }
}
