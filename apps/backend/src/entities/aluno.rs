use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "aluno")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_aluno")]
    pub id: i64,
    #[sea_orm(column_name = "nome_aluno")]
    pub name: String,
    #[sea_orm(column_name = "email_aluno")]
    pub email: String,
    #[sea_orm(column_name = "ativo")]
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::matricula::Entity")]
    Matricula,
}

impl Related<super::matricula::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matricula.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
