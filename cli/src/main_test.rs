use super::*;
use clap::Parser;

const SPACE: &str = "6d3a1d5e-2f39-4d8e-9b7e-0b6c9b1a2c3d";

fn offline_context() -> CliContext {
    let config = ClientConfig::for_base_url("http://127.0.0.1:9", std::env::temp_dir()).unwrap();
    CliContext {
        client: ApiClient::new(&config).unwrap(),
        store: FileStore::in_dir(&config.state_dir),
        base_url: config.base_url,
        json: false,
    }
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn people_add_takes_role_tags_and_products() {
    let cli = Cli::try_parse_from([
        "peoplemover", "people", "add", SPACE, "Ada", "--role", "Dev", "--tag", "remote", "--tag", "night", "--new",
        "--product", "3", "--product", "4",
    ])
    .unwrap();
    match cli.command {
        Command::People(PeopleCommand::Add { role, tags, new_person, products, .. }) => {
            assert_eq!(role.as_deref(), Some("Dev"));
            assert_eq!(tags, ["remote", "night"]);
            assert!(new_person);
            assert_eq!(products, [3, 4]);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn people_add_without_products_still_parses() {
    let cli = Cli::try_parse_from(["peoplemover", "people", "add", SPACE, "Ada"]).unwrap();
    assert!(matches!(cli.command, Command::People(PeopleCommand::Add { ref products, .. }) if products.is_empty()));
}

#[test]
fn assign_add_and_placeholder_parse() {
    let cli = Cli::try_parse_from([
        "peoplemover", "assign", "add", SPACE, "--person", "7", "--product", "30", "--placeholder",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Command::Assign(AssignCommand::Add { person: 7, product: 30, placeholder: true, .. })
    ));

    let cli =
        Cli::try_parse_from(["peoplemover", "assign", "placeholder", SPACE, "--person", "7", "--product", "30"]).unwrap();
    assert!(matches!(cli.command, Command::Assign(AssignCommand::Placeholder { person: 7, product: 30, .. })));
}

#[test]
fn role_edit_accepts_a_color() {
    let cli = Cli::try_parse_from(["peoplemover", "tags", "edit", SPACE, "roles", "2", "SE", "--color", "4"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Tags(TagsCommand::Edit { kind: TagKind::Role, id: 2, color: Some(4), .. })
    ));
}

#[test]
fn edits_replace_only_given_fields() {
    let cli = Cli::try_parse_from([
        "peoplemover", "products", "edit", SPACE, "10", "--name", "Beta", "--product-tag", "FordX",
    ])
    .unwrap();
    match cli.command {
        Command::Products(ProductsCommand::Edit { name, location, product_tags, end, .. }) => {
            assert_eq!(name.as_deref(), Some("Beta"));
            assert_eq!(location, None);
            assert_eq!(product_tags, ["FordX"]);
            assert_eq!(end, None);
        }
        other => panic!("unexpected command {other:?}"),
    }

    let cli = Cli::try_parse_from(["peoplemover", "people", "edit", SPACE, "7", "--new", "false"]).unwrap();
    assert!(matches!(cli.command, Command::People(PeopleCommand::Edit { new_person: Some(false), .. })));
}

// =============================================================
// Dispatch
// =============================================================

#[tokio::test]
async fn move_within_one_product_is_rejected_before_any_request() {
    let mut ctx = offline_context();
    let command = AssignCommand::Move { space: Uuid::nil(), assignment: 1, from: 4, to: 4, date: None };
    let err = run_assign(&mut ctx, command).await.unwrap_err();
    assert!(matches!(err, CliError::SameProduct(4)));
    assert_eq!(err.error_code(), "E_SAME_PRODUCT");
}

#[test]
fn unknown_tag_names_have_their_own_code() {
    let err = CliError::TagNotFound { kind: TagKind::Role.label(), name: "Wizard".into() };
    assert_eq!(err.to_string(), "no role named `Wizard`");
    assert_eq!(err.error_code(), "E_TAG_NOT_FOUND");
}
