use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Projects::Description)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Projects::LongDescription).string_len(2000))
                    // JSON array of strings
                    .col(ColumnDef::new(Projects::Technologies).text().not_null())
                    .col(ColumnDef::new(Projects::GithubUrl).text())
                    .col(ColumnDef::new(Projects::LiveUrl).text())
                    .col(ColumnDef::new(Projects::ImageUrl).text())
                    // JSON array of strings
                    .col(ColumnDef::new(Projects::Images).text().not_null())
                    .col(
                        ColumnDef::new(Projects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::Status)
                            .string_len(32)
                            .not_null()
                            .default("COMPLETED"),
                    )
                    .col(ColumnDef::new(Projects::StartDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Projects::EndDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Projects::Category).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Projects::Priority)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // List queries filter on these and sort featured-first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_featured_priority
                ON projects (featured DESC, priority DESC, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_category
                ON projects (category);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    LongDescription,
    Technologies,
    GithubUrl,
    LiveUrl,
    ImageUrl,
    Images,
    Featured,
    Status,
    StartDate,
    EndDate,
    Category,
    Priority,
    CreatedAt,
    UpdatedAt,
}
