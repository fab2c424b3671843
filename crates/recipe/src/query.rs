use menuplan_db::table::Recipe as RecipeTable;
use menuplan_shared::{MealSlot, Recipe};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use sqlx::prelude::FromRow;

const COLUMNS: [RecipeTable; 13] = [
    RecipeTable::Id,
    RecipeTable::Title,
    RecipeTable::Calories,
    RecipeTable::Protein,
    RecipeTable::Price,
    RecipeTable::Diet,
    RecipeTable::Cuisine,
    RecipeTable::MealSlot,
    RecipeTable::CookingTime,
    RecipeTable::Ingredients,
    RecipeTable::Instructions,
    RecipeTable::Description,
    RecipeTable::ImageUrl,
];

#[derive(FromRow)]
pub struct RecipeRow {
    pub id: String,
    pub title: String,
    pub calories: Option<i32>,
    pub protein: Option<i32>,
    pub price: Option<i32>,
    pub diet: Option<String>,
    pub cuisine: Option<String>,
    pub meal_slot: Option<sqlx::types::Text<MealSlot>>,
    pub cooking_time: Option<i32>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: Some(row.id),
            title: row.title,
            calories: row.calories,
            protein: row.protein,
            price: row.price,
            diet: row.diet,
            cuisine: row.cuisine,
            meal_slot: row.meal_slot.map(|slot| slot.0),
            cooking_time: row.cooking_time,
            ingredients: row.ingredients,
            instructions: row.instructions,
            description: row.description,
            image_url: row.image_url,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterQuery {
    pub meal_slot: Option<MealSlot>,
    pub diet: Option<String>,
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    pub async fn all(&self) -> anyhow::Result<Vec<Recipe>> {
        self.filter(FilterQuery::default()).await
    }

    pub async fn filter(&self, input: FilterQuery) -> anyhow::Result<Vec<Recipe>> {
        let mut statement = sea_query::Query::select()
            .columns(COLUMNS)
            .from(RecipeTable::Table)
            .order_by(RecipeTable::CreatedAt, Order::Asc)
            .order_by(RecipeTable::Id, Order::Asc)
            .to_owned();

        if let Some(slot) = input.meal_slot {
            statement.and_where(Expr::col(RecipeTable::MealSlot).eq(slot.to_string()));
        }

        if let Some(diet) = input.diet.filter(|d| !d.trim().is_empty()) {
            statement.and_where(Expr::cust_with_values(
                "LOWER(diet) = ?",
                [diet.trim().to_lowercase()],
            ));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<Recipe>> {
        let id = id.into();
        let statement = sea_query::Query::select()
            .columns(COLUMNS)
            .from(RecipeTable::Table)
            .and_where(Expr::col(RecipeTable::Id).eq(&id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(Into::into))
    }
}
