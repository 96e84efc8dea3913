use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "administrador")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_admin")]
    pub id: i64,
    #[sea_orm(column_name = "nome_admin")]
    pub name: String,
    #[sea_orm(column_name = "email_admin")]
    pub email: String,
    #[serde(skip_serializing)]
    #[sea_orm(column_name = "senha_admin")]
    pub password_hash: String,
    #[sea_orm(column_name = "ativo")]
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
