use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Authors {
    Table,
    Id,
    FirstName,
    FamilyName,
    DateOfBirth,
    DateOfDeath,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Authors::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Authors::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Authors::FamilyName).string_len(100).not_null())
                    .col(ColumnDef::new(Authors::DateOfBirth).date().null())
                    .col(ColumnDef::new(Authors::DateOfDeath).date().null())
                    .to_owned(),
            )
            .await?;

        // Listing sorts by family name, then first name
        manager
            .create_index(
                Index::create()
                    .name("ix_authors_family_first")
                    .table(Authors::Table)
                    .col(Authors::FamilyName)
                    .col(Authors::FirstName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ix_authors_family_first")
                    .table(Authors::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Authors::Table).to_owned())
            .await?;

        Ok(())
    }
}
