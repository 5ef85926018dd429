use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: u16) -> Self {
        Self {
            make: make.into(),
            year,
            model: None,
        }
    }

    pub fn with_model(make: impl Into<String>, year: u16, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            year,
            model: Some(model.into()),
        }
    }
}

pub fn describe(vehicle: &Vehicle) -> String {
    format!("Make: {}, Year: {}", vehicle.make, vehicle.year)
}

pub fn model_description(vehicle: &Vehicle) -> Option<String> {
    vehicle
        .model
        .as_ref()
        .map(|model| format!("Model: {}", model))
}

pub fn full_description(vehicle: &Vehicle) -> String {
    match model_description(vehicle) {
        Some(model) => format!("{}, {}", describe(vehicle), model),
        None => describe(vehicle),
    }
}
