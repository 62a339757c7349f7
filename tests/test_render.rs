use petits_plats::render::{active_tags, recipe_card, recipe_grid};
use petits_plats::{builtin_recipes, HtmlRenderer, Ingredient, Recipe, Session, TagCategory};
use scraper::{Html, Selector};

fn select_texts(html: &str, selector: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse(selector).unwrap();
    fragment
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}

fn sample_recipe() -> Recipe {
    Recipe {
        id: 1,
        image: "Recette01.jpg".to_string(),
        name: "Limonade de Coco".to_string(),
        servings: 1,
        ingredients: vec![
            Ingredient::new("Lait de coco").with_quantity(400.0).with_unit("ml"),
            Ingredient::new("Jus de citron").with_quantity(2.0),
            Ingredient::new("Glaçons"),
        ],
        time: 10,
        description: "Mettre les glaçons dans le blender".to_string(),
        appliance: "Blender".to_string(),
        ustensils: vec!["verres".to_string()],
    }
}

#[test]
fn test_recipe_card_structure() {
    let html = recipe_card(&sample_recipe(), "assets/images");

    assert_eq!(select_texts(&html, "h3.recipe-title"), vec!["Limonade de Coco"]);
    assert_eq!(select_texts(&html, ".recipe-time"), vec!["10min"]);
    assert_eq!(
        select_texts(&html, ".ingredient-name"),
        vec!["Lait de coco", "Jus de citron", "Glaçons"]
    );
    // Glaçons has neither quantity nor unit
    assert_eq!(select_texts(&html, ".ingredient-quantity"), vec!["400 ml", "2"]);

    let fragment = Html::parse_fragment(&html);
    let img = fragment
        .select(&Selector::parse("img.recipe-image").unwrap())
        .next()
        .unwrap();
    assert_eq!(img.value().attr("src"), Some("assets/images/Recette01.jpg"));
    assert_eq!(img.value().attr("alt"), Some("Limonade de Coco"));
}

#[test]
fn test_recipe_card_escapes_text() {
    let mut recipe = sample_recipe();
    recipe.name = "<script>alert(1)</script>".to_string();
    recipe.description = "Sel & \"poivre\"".to_string();

    let html = recipe_card(&recipe, "assets/images/");
    assert!(!html.contains("<script>"));
    assert_eq!(
        select_texts(&html, "h3.recipe-title"),
        vec!["<script>alert(1)</script>"]
    );
    assert_eq!(select_texts(&html, ".recipe-description"), vec!["Sel & \"poivre\""]);
    assert!(html.contains(r#"src="assets/images/Recette01.jpg""#));
}

#[test]
fn test_grid_renders_one_card_per_recipe() {
    let recipes = builtin_recipes();
    let refs: Vec<&Recipe> = recipes.iter().take(3).collect();
    let html = recipe_grid(&refs, "img");

    assert_eq!(select_texts(&html, "article.recipe-card").len(), 3);
    assert!(recipe_grid(&[], "img").is_empty());
}

#[test]
fn test_active_tag_chips() {
    let mut tags = petits_plats::ActiveTags::new();
    tags.add("lait de coco", TagCategory::Ingredients);
    tags.add("blender", TagCategory::Appliances);

    let html = active_tags(&tags);
    assert_eq!(select_texts(&html, ".tag span"), vec!["Lait de coco", "Blender"]);

    let fragment = Html::parse_fragment(&html);
    let buttons: Vec<_> = fragment
        .select(&Selector::parse("button.tag-close").unwrap())
        .map(|b| {
            (
                b.value().attr("data-value").unwrap().to_string(),
                b.value().attr("data-type").unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        buttons,
        vec![
            ("lait de coco".to_string(), "ingredients".to_string()),
            ("blender".to_string(), "appliances".to_string()),
        ]
    );
}

#[test]
fn test_renderer_follows_session() {
    let renderer = HtmlRenderer::new("assets/images");
    let mut session = Session::builder()
        .recipes(builtin_recipes())
        .listener(renderer.clone())
        .build()
        .unwrap();

    session.refresh();
    let page = renderer.page();
    assert_eq!(page.count_label, "12 recettes");
    assert!(!page.no_results);
    assert!(page.active_tags.is_empty());

    session.add_tag("blender", TagCategory::Appliances);
    let page = renderer.page();
    assert_eq!(page.count_label, "1 recette");
    assert_eq!(select_texts(&page.grid, ".recipe-title"), vec!["Limonade de Coco"]);
    assert_eq!(select_texts(&page.appliances_list, "li"), vec!["Blender"]);
    assert_eq!(
        select_texts(&page.ustensils_list, "li"),
        vec!["Cuillère à soupe", "Presse citron", "Verres"]
    );

    session.set_query("introuvable");
    let page = renderer.page();
    assert_eq!(page.count_label, "0 recette");
    assert!(page.no_results);
    assert!(page.grid.is_empty());
    assert!(page.ingredients_list.is_empty());
}

#[test]
fn test_full_page_contains_every_region() {
    let renderer = HtmlRenderer::new("assets/images");
    let mut session = Session::builder()
        .recipes(builtin_recipes())
        .tag(TagCategory::Appliances, "blender")
        .listener(renderer.clone())
        .build()
        .unwrap();
    session.refresh();

    let html = renderer.page().to_html();
    assert_eq!(select_texts(&html, "#recipesCount"), vec!["1 recette"]);
    assert_eq!(select_texts(&html, "#activeTags .tag span"), vec!["Blender"]);
    assert_eq!(select_texts(&html, "#appliancesList li"), vec!["Blender"]);
    assert_eq!(select_texts(&html, "#ustensilsList li").len(), 3);
    assert_eq!(select_texts(&html, "#ingredientsList li").len(), 5);
    assert_eq!(select_texts(&html, "#recipesGrid .recipe-title"), vec!["Limonade de Coco"]);
    assert!(html.contains(r#"<div id="noResults" style="display: none">"#));

    session.set_query("introuvable");
    let html = renderer.page().to_html();
    assert_eq!(select_texts(&html, "#recipesCount"), vec!["0 recette"]);
    assert!(html.contains(r#"<div id="noResults" style="display: block">"#));
    assert!(select_texts(&html, "#recipesGrid article").is_empty());
    assert!(select_texts(&html, "#ingredientsList li").is_empty());
}
