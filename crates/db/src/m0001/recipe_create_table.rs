use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Recipe;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Recipe::Table)
        .col(
            ColumnDef::new(Recipe::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Recipe::Title)
                .string()
                .not_null()
                .string_len(200),
        )
        .col(ColumnDef::new(Recipe::Calories).integer().null())
        .col(ColumnDef::new(Recipe::Protein).integer().null())
        .col(ColumnDef::new(Recipe::Price).integer().null())
        .col(ColumnDef::new(Recipe::Diet).string().string_len(50).null())
        .col(ColumnDef::new(Recipe::Cuisine).string().string_len(50).null())
        .col(ColumnDef::new(Recipe::MealSlot).string().string_len(25).null())
        .col(ColumnDef::new(Recipe::CookingTime).integer().null())
        .col(ColumnDef::new(Recipe::Ingredients).text().null())
        .col(ColumnDef::new(Recipe::Instructions).text().null())
        .col(ColumnDef::new(Recipe::Description).text().null())
        .col(ColumnDef::new(Recipe::ImageUrl).string().string_len(500).null())
        .col(ColumnDef::new(Recipe::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Recipe::UpdatedAt).big_integer().null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Recipe::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
