//! Wire shapes of the two remote services. Only the fields we render are
//! declared; everything else in the payloads is ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct WeatherResponse {
    pub location: LocationModel,
    pub current: CurrentModel,
}

#[derive(Debug, Deserialize)]
pub(super) struct LocationModel {
    pub name: String,
    #[serde(default)]
    pub region: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct CurrentModel {
    pub temp_f: f64,
    pub condition: ConditionModel,
    pub humidity: u32,
    pub wind_mph: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConditionModel {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct AdviceResponse {
    pub slip: SlipModel,
}

#[derive(Debug, Deserialize)]
pub(super) struct SlipModel {
    pub id: u64,
    pub advice: String,
}
