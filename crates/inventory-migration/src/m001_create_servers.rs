//! Миграция: создание таблицы servers.

use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m001_create_servers"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Servers::Table)
                    .if_not_exists()
                    // AUTOINCREMENT в SQLite: id удалённых записей не выдаются повторно
                    .col(
                        ColumnDef::new(Servers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Servers::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Servers::IpAddress)
                            .string_len(39)
                            .not_null()
                            .default("0.0.0.0"),
                    )
                    .col(
                        ColumnDef::new(Servers::Description)
                            .string_len(255)
                            .not_null()
                            .default("no_description"),
                    )
                    .col(
                        ColumnDef::new(Servers::ServerIsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Servers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Servers {
    Table,
    Id,
    Name,
    IpAddress,
    Description,
    ServerIsActive,
}
