pub mod asignacion;
pub mod empleado;
pub mod finca;
pub mod jornada;
pub mod pago;
pub mod usuario;

// Re-export all repositories for easy importing
pub use asignacion::AsignacionRepository;
pub use empleado::EmpleadoRepository;
pub use finca::FincaRepository;
pub use jornada::JornadaRepository;
pub use pago::PagoRepository;
pub use usuario::UsuarioRepository;
