use serde::{
    Deserialize,
    Serialize
};

/// Direction in which ln G flows as the system size grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowDirection {
    /// β > 0: conductance grows, the system scales towards a metal.
    Metallic,
    /// β < 0: conductance shrinks, states localize.
    Insulating,
    Critical
}

impl FlowDirection {
    pub fn from_beta(beta: f64) -> FlowDirection {
        if beta > 0.0 {
            FlowDirection::Metallic
        } else if beta < 0.0 {
            FlowDirection::Insulating
        } else {
            FlowDirection::Critical
        }
    }

    /// +1 for flow towards larger ln G, -1 towards smaller, 0 at a fixed point.
    pub fn sign(&self) -> f64 {
        match self {
            FlowDirection::Metallic => 1.0,
            FlowDirection::Insulating => -1.0,
            FlowDirection::Critical => 0.0
        }
    }
}
