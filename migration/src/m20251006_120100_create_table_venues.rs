use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create venues table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Venues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Venues::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Venues::UserId).uuid().not_null())
                    .col(ColumnDef::new(Venues::VenueName).string_len(100).not_null())
                    .col(ColumnDef::new(Venues::City).string_len(50).not_null())
                    .col(ColumnDef::new(Venues::Address).string_len(255).not_null())
                    .col(ColumnDef::new(Venues::SeatingCapacity).integer().not_null())
                    .col(ColumnDef::new(Venues::Biography).text())
                    .col(ColumnDef::new(Venues::OpenHours).string_len(100).not_null())
                    .col(ColumnDef::new(Venues::OpenDays).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Venues::Photos)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Venues::RegistrationOrder)
                            .integer()
                            .not_null(),
                    )
                    // City the registration slot was allocated in; moving the venue keeps it
                    .col(
                        ColumnDef::new(Venues::RegistrationCity)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Venues::ColorCode).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Venues::Shows)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Venues::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Venues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Venues::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_venues_user_id")
                            .from(Venues::Table, Venues::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // One profile per owner
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_venues_user_id_unique
                ON venues (user_id);
                "#,
            )
            .await?;

        // Two venues registered in one city can never share a registration slot
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_venues_registration_city_order_unique
                ON venues (registration_city, registration_order);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_venues_city_active
                ON venues (city, venue_name)
                WHERE is_active = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_venues_updated_at
                BEFORE UPDATE ON venues
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
                DROP TRIGGER IF EXISTS update_venues_updated_at ON venues;
                DROP INDEX IF EXISTS idx_venues_user_id_unique;
                DROP INDEX IF EXISTS idx_venues_registration_city_order_unique;
                DROP INDEX IF EXISTS idx_venues_city_active;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Venues::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Venues {
    Table,
    Id,
    UserId,
    VenueName,
    City,
    Address,
    SeatingCapacity,
    Biography,
    OpenHours,
    OpenDays,
    Photos,
    RegistrationOrder,
    RegistrationCity,
    ColorCode,
    Shows,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
