use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "professor")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_professor")]
    pub id: i64,
    #[sea_orm(column_name = "nome_professor")]
    pub name: String,
    #[sea_orm(column_name = "email_professor")]
    pub email: String,
    #[serde(skip_serializing)]
    #[sea_orm(column_name = "senha_hash")]
    pub password_hash: String,
    #[sea_orm(column_name = "id_disciplina")]
    pub discipline_id: Option<i64>,
    #[sea_orm(column_name = "ativo")]
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
