mod elements;
mod maneuvers;

pub use elements::{specific_angular_momentum, OrbitalElements};
pub use maneuvers::{
    circular_period, circular_velocity, circular_velocity_mu, escape_velocity, hohmann,
    hohmann_mu, vis_viva, HohmannTransfer,
};
