use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum Recipe {
    Table,
    Id,
    Title,
    Calories,
    Protein,
    Price,
    Diet,
    Cuisine,
    MealSlot,
    CookingTime,
    Ingredients,
    Instructions,
    Description,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
