use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Administrador {
    Table,
    IdAdmin,
    NomeAdmin,
    EmailAdmin,
    SenhaAdmin,
    Ativo,
}

#[derive(Iden)]
enum Professor {
    Table,
    IdProfessor,
    NomeProfessor,
    EmailProfessor,
    SenhaHash,
    IdDisciplina,
    Ativo,
}

#[derive(Iden)]
enum Aluno {
    Table,
    IdAluno,
    NomeAluno,
    EmailAluno,
    Ativo,
}

#[derive(Iden)]
enum Matricula {
    Table,
    IdMatricula,
    IdAluno,
    NumeroMatricula,
    Ativa,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Administrador::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Administrador::IdAdmin)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Administrador::NomeAdmin)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Administrador::EmailAdmin)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Administrador::SenhaAdmin)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Administrador::Ativo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_administrador_email")
                    .table(Administrador::Table)
                    .col(Administrador::EmailAdmin)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Professor::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professor::IdProfessor)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Professor::NomeProfessor)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professor::EmailProfessor)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Professor::SenhaHash).string().not_null())
                    .col(ColumnDef::new(Professor::IdDisciplina).big_integer())
                    .col(
                        ColumnDef::new(Professor::Ativo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_professor_email")
                    .table(Professor::Table)
                    .col(Professor::EmailProfessor)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Aluno::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Aluno::IdAluno)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Aluno::NomeAluno).string().not_null())
                    .col(ColumnDef::new(Aluno::EmailAluno).string().not_null())
                    .col(
                        ColumnDef::new(Aluno::Ativo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_aluno_email")
                    .table(Aluno::Table)
                    .col(Aluno::EmailAluno)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Matricula::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Matricula::IdMatricula)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Matricula::IdAluno)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Matricula::NumeroMatricula)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Matricula::Ativa)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matricula_aluno")
                            .from(Matricula::Table, Matricula::IdAluno)
                            .to(Aluno::Table, Aluno::IdAluno)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matricula_numero")
                    .table(Matricula::Table)
                    .col(Matricula::NumeroMatricula)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matricula_aluno")
                    .table(Matricula::Table)
                    .col(Matricula::IdAluno)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Matricula::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Aluno::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Administrador::Table).to_owned())
            .await?;
        Ok(())
    }
}
