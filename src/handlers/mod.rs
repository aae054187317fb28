pub mod asignaciones;
pub mod auth;
pub mod empleados;
pub mod fincas;
pub mod jornadas;
pub mod pagos;
pub mod shared;
