pub mod decollement;
pub mod dril;
pub mod epaisseur;
pub mod kyste;
pub mod membranes;
pub mod points;
pub mod ponts;
