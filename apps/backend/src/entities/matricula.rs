use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matricula")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_matricula")]
    pub id: i64,
    #[sea_orm(column_name = "id_aluno")]
    pub student_id: i64,
    #[sea_orm(column_name = "numero_matricula")]
    pub number: String,
    #[sea_orm(column_name = "ativa")]
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aluno::Entity",
        from = "Column::StudentId",
        to = "super::aluno::Column::Id"
    )]
    Aluno,
}

impl Related<super::aluno::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aluno.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
