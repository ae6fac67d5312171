use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Journalists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Journalists::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Journalists::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Journalists::FullName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Journalists::Bio).text())
                    .col(ColumnDef::new(Journalists::ProfilePhoto).json_binary())
                    .col(
                        ColumnDef::new(Journalists::AreasOfCoverage)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Journalists::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Journalists::VerifiedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Journalists::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Journalists::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Journalists::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journalists_user_id")
                            .from(Journalists::Table, Journalists::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_journalists_user_id_unique
                ON journalists (user_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_journalists_updated_at
                BEFORE UPDATE ON journalists
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_journalists_updated_at ON journalists;
                DROP INDEX IF EXISTS idx_journalists_user_id_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Journalists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Journalists {
    Table,
    Id,
    UserId,
    FullName,
    Bio,
    ProfilePhoto,
    AreasOfCoverage,
    IsVerified,
    VerifiedAt,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
