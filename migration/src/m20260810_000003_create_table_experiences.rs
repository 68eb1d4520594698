use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Experiences::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Experiences::Company)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::Location).string_len(200))
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    .col(
                        ColumnDef::new(Experiences::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::EndDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Experiences::Current)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Experiences::Type)
                            .string_len(32)
                            .not_null()
                            .default("FULL_TIME"),
                    )
                    .col(ColumnDef::new(Experiences::LogoUrl).text())
                    .col(ColumnDef::new(Experiences::CompanyUrl).text())
                    // JSON array of strings
                    .col(ColumnDef::new(Experiences::Achievements).text().not_null())
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Experiences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Timeline queries sort ongoing-first, then newest start date.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_experiences_timeline
                ON experiences (current DESC, start_date DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    Location,
    Description,
    StartDate,
    EndDate,
    Current,
    Type,
    LogoUrl,
    CompanyUrl,
    Achievements,
    CreatedAt,
    UpdatedAt,
}
