use menuplan_db::table::Recipe as RecipeTable;
use menuplan_shared::{MealSlot, Recipe};
use sea_query::{Expr, ExprTrait, InsertStatement, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use sqlx::SqlitePool;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

#[derive(Validate, Deserialize, Clone, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeInput {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(range(min = 0))]
    pub calories: Option<i32>,
    #[validate(range(min = 0))]
    pub protein: Option<i32>,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
    #[validate(length(max = 50))]
    pub diet: Option<String>,
    #[validate(length(max = 50))]
    pub cuisine: Option<String>,
    pub meal_slot: Option<MealSlot>,
    #[validate(range(min = 0))]
    pub cooking_time: Option<i32>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
}

impl RecipeInput {
    fn into_recipe(self, id: String) -> Recipe {
        Recipe {
            id: Some(id),
            title: self.title,
            calories: self.calories,
            protein: self.protein,
            price: self.price,
            diet: self.diet,
            cuisine: self.cuisine,
            meal_slot: self.meal_slot,
            cooking_time: self.cooking_time,
            ingredients: self.ingredients,
            instructions: self.instructions,
            description: self.description,
            image_url: self.image_url,
        }
    }

    fn insert_statement(&self, id: &str, created_at: i64) -> InsertStatement {
        Query::insert()
            .into_table(RecipeTable::Table)
            .columns([
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
                RecipeTable::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                self.title.to_owned().into(),
                self.calories.into(),
                self.protein.into(),
                self.price.into(),
                self.diet.to_owned().into(),
                self.cuisine.to_owned().into(),
                self.meal_slot.map(|slot| slot.to_string()).into(),
                self.cooking_time.into(),
                self.ingredients.to_owned().into(),
                self.instructions.to_owned().into(),
                self.description.to_owned().into(),
                self.image_url.to_owned().into(),
                created_at.into(),
            ])
            .to_owned()
    }
}

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    pub async fn create(&self, input: RecipeInput) -> menuplan_shared::Result<Recipe> {
        input.validate()?;

        let id = Ulid::new().to_string();
        let statement = input.insert_statement(&id, OffsetDateTime::now_utc().unix_timestamp());
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(recipe.id = %id, title = %input.title, "recipe created");

        Ok(input.into_recipe(id))
    }

    pub async fn update(
        &self,
        id: impl Into<String>,
        input: RecipeInput,
    ) -> menuplan_shared::Result<Recipe> {
        input.validate()?;

        let id = id.into();
        let statement = Query::update()
            .table(RecipeTable::Table)
            .values([
                (RecipeTable::Title, input.title.to_owned().into()),
                (RecipeTable::Calories, input.calories.into()),
                (RecipeTable::Protein, input.protein.into()),
                (RecipeTable::Price, input.price.into()),
                (RecipeTable::Diet, input.diet.to_owned().into()),
                (RecipeTable::Cuisine, input.cuisine.to_owned().into()),
                (
                    RecipeTable::MealSlot,
                    input.meal_slot.map(|slot| slot.to_string()).into(),
                ),
                (RecipeTable::CookingTime, input.cooking_time.into()),
                (RecipeTable::Ingredients, input.ingredients.to_owned().into()),
                (
                    RecipeTable::Instructions,
                    input.instructions.to_owned().into(),
                ),
                (RecipeTable::Description, input.description.to_owned().into()),
                (RecipeTable::ImageUrl, input.image_url.to_owned().into()),
                (
                    RecipeTable::UpdatedAt,
                    OffsetDateTime::now_utc().unix_timestamp().into(),
                ),
            ])
            .and_where(Expr::col(RecipeTable::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            menuplan_shared::not_found!("recipe");
        }

        tracing::info!(recipe.id = %id, "recipe updated");

        Ok(input.into_recipe(id))
    }

    pub async fn delete(&self, id: impl Into<String>) -> menuplan_shared::Result<()> {
        let id = id.into();
        let statement = Query::delete()
            .from_table(RecipeTable::Table)
            .and_where(Expr::col(RecipeTable::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            menuplan_shared::not_found!("recipe");
        }

        tracing::info!(recipe.id = %id, "recipe deleted");

        Ok(())
    }

    /// Inserts every recipe in a single transaction. Nothing is written if one
    /// of them fails validation.
    pub async fn import(&self, inputs: Vec<RecipeInput>) -> menuplan_shared::Result<Vec<Recipe>> {
        if inputs.is_empty() {
            menuplan_shared::bail!("nothing to import");
        }

        for input in inputs.iter() {
            input.validate()?;
        }

        let created_at = OffsetDateTime::now_utc().unix_timestamp();
        let mut tx = self.0.begin().await?;
        let mut recipes = Vec::with_capacity(inputs.len());

        for input in inputs {
            let id = Ulid::new().to_string();
            let (sql, values) = input
                .insert_statement(&id, created_at)
                .build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
            recipes.push(input.into_recipe(id));
        }

        tx.commit().await?;

        tracing::info!(count = recipes.len(), "recipes imported");

        Ok(recipes)
    }

    /// Parses a JSON array of recipes and imports it.
    pub async fn import_json(&self, json: &str) -> menuplan_shared::Result<Vec<Recipe>> {
        let inputs: Vec<RecipeInput> = serde_json::from_str(json)?;

        self.import(inputs).await
    }
}
