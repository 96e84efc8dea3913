pub mod administrador;
pub mod aluno;
pub mod matricula;
pub mod professor;

pub use administrador::Entity as Administrador;
pub use aluno::Entity as Aluno;
pub use matricula::Entity as Matricula;
pub use professor::Entity as Professor;
