pub mod asignacion;
pub mod empleado;
pub mod fields;
pub mod finca;
pub mod jornada;
pub mod pago;
pub mod usuario;

// Re-export all models for easy importing
pub use asignacion::*;
pub use empleado::*;
pub use finca::*;
pub use jornada::*;
pub use pago::*;
pub use usuario::*;
