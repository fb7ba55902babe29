mod render;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use peoplemover::config::{ConfigError, normalize_base_url};
use peoplemover::error::StoreError;
use peoplemover::net::tags::{TagKind, role_color_id, tag_by_name};
use peoplemover::net::types::{
    AnyTag, Person, Product, ProductPlaceholderPair, RoleRequest, Space, Tag, TagRequest, wire_date,
};
use peoplemover::state::filters::{TagsByType, build_filter_groups, build_filter_options, toggle};
use peoplemover::state::{ActiveFilters, FilterType, Flags, SpaceState, SpaceView};
use peoplemover::util::auth::{AccessOutcome, adfs_login_url};
use peoplemover::util::banner::{close_banner, should_show_banner};
use peoplemover::util::form::{
    FormError, validate_person_name, validate_product_name, validate_space_name, validate_tag_name,
};
use peoplemover::util::import::{ImportError, parse_import, template};
use peoplemover::util::persistence::{
    FileStore, clear_access_token, load_access_token, load_filters, save_access_token,
    set_filters_by_type,
};
use peoplemover::util::person::{empty_person, is_archived};
use peoplemover::util::product::{empty_product, is_unassigned_product};
use peoplemover::util::reassign::{
    add_assignment, archive_product_and_release, create_placed_person, move_assignment, products_after_unassign,
    toggle_placeholder,
};
use peoplemover::util::report::{report_file_name, report_to_csv};
use peoplemover::util::sort::{ProductSortBy, sort_people_by_name};
use peoplemover::util::time_on_product::{assignment_history_rows, generate_time_on_product_items};
use peoplemover::util::user_id;
use peoplemover::{ApiClient, ApiError, ClientConfig, ErrorCode};
use time::{Date, OffsetDateTime};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("invalid user ids: {0}")]
    InvalidUserIds(String),
    #[error("space {0} not found")]
    SpaceNotFound(Uuid),
    #[error("space {0} is read-only for this token")]
    ReadOnly(Uuid),
    #[error("login required; open `peoplemover login-url` and store the new token with `peoplemover token set`")]
    LoginRequired,
    #[error("product {0} not found on this date")]
    ProductNotFound(i64),
    #[error("person {0} not found")]
    PersonNotFound(i64),
    #[error("assignment {assignment} not found on product {product}")]
    AssignmentNotFound { assignment: i64, product: i64 },
    #[error("person {person} has no assignment on product {product}")]
    NotAssigned { person: i64, product: i64 },
    #[error("assignment is already on product {0}")]
    SameProduct(i64),
    #[error("no {kind} named `{name}`")]
    TagNotFound { kind: &'static str, name: String },
    #[error("space has no owner to transfer from")]
    NoOwner,
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("json output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Api(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Import(e) => e.error_code(),
            Self::Form(e) => e.error_code(),
            Self::InvalidUserIds(_) => "E_INVALID_USER_IDS",
            Self::SpaceNotFound(_) => "E_SPACE_NOT_FOUND",
            Self::ReadOnly(_) => "E_READ_ONLY",
            Self::LoginRequired => "E_LOGIN_REQUIRED",
            Self::ProductNotFound(_) => "E_PRODUCT_NOT_FOUND",
            Self::PersonNotFound(_) => "E_PERSON_NOT_FOUND",
            Self::AssignmentNotFound { .. } => "E_ASSIGNMENT_NOT_FOUND",
            Self::NotAssigned { .. } => "E_NOT_ASSIGNED",
            Self::SameProduct(_) => "E_SAME_PRODUCT",
            Self::TagNotFound { .. } => "E_TAG_NOT_FOUND",
            Self::NoOwner => "E_NO_OWNER",
            Self::Io { .. } => "E_IO",
            Self::Csv(_) => "E_CSV",
            Self::Json(_) => "E_JSON",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Api(e) => e.retryable(),
            _ => false,
        }
    }
}

impl CliError {
    /// 401s and failed access checks both mean the stored token is useless.
    fn clears_token(&self) -> bool {
        matches!(self, Self::LoginRequired | Self::Api(ApiError::Unauthorized))
    }
}

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "peoplemover", about = "PeopleMover command-line client")]
struct Cli {
    #[arg(long, env = "PEOPLEMOVER_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "PEOPLEMOVER_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    #[arg(long, env = "PEOPLEMOVER_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend answers `GET /api/config`.
    Ping,
    #[command(subcommand)]
    Spaces(SpacesCommand),
    #[command(subcommand)]
    Users(UsersCommand),
    #[command(subcommand)]
    Products(ProductsCommand),
    #[command(subcommand)]
    People(PeopleCommand),
    #[command(subcommand)]
    Assign(AssignCommand),
    #[command(subcommand)]
    Tags(TagsCommand),
    TimeOnProduct {
        space: Uuid,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    History {
        space: Uuid,
        person: i64,
    },
    /// Write the people report as CSV.
    Report {
        space: Uuid,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
        /// Output path, `-` for stdout. Defaults to `<space>_<date>.csv`.
        #[arg(long)]
        output: Option<String>,
    },
    /// Import people from a tab-separated file.
    Import {
        space: Uuid,
        file: Option<PathBuf>,
        #[arg(long)]
        dry_run: bool,
        /// Print the import template instead of importing.
        #[arg(long, conflicts_with = "file")]
        template: bool,
    },
    #[command(subcommand)]
    Filters(FiltersCommand),
    /// Show the announcement banner unless it was dismissed.
    Banner {
        #[arg(long)]
        close: bool,
    },
    LoginUrl {
        /// Origin of the web client; defaults to the base URL.
        #[arg(long)]
        origin: Option<String>,
    },
    #[command(subcommand)]
    Token(TokenCommand),
    Colors,
}

#[derive(Subcommand, Debug)]
enum SpacesCommand {
    List,
    Show { space: Uuid },
    Create { name: String },
    Rename { space: Uuid, name: String },
    /// Make the read-only today view public or private.
    Share {
        space: Uuid,
        #[arg(long, conflicts_with = "private")]
        public: bool,
        #[arg(long)]
        private: bool,
    },
    Delete { space: Uuid },
    Transfer {
        space: Uuid,
        #[arg(long)]
        to: String,
    },
}

#[derive(Subcommand, Debug)]
enum UsersCommand {
    List { space: Uuid },
    /// Invite users; ids may be separated by commas, semicolons, or spaces.
    Invite {
        space: Uuid,
        #[arg(required = true, num_args = 1..)]
        user_ids: Vec<String>,
    },
    Remove { space: Uuid, user_id: String },
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    #[arg(long = "location")]
    locations: Vec<String>,
    #[arg(long = "product-tag")]
    product_tags: Vec<String>,
    #[arg(long = "role")]
    roles: Vec<String>,
    #[arg(long = "person-tag")]
    person_tags: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum ProductsCommand {
    List {
        space: Uuid,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
        #[arg(long, default_value = "name")]
        sort: ProductSortBy,
        #[arg(long)]
        archived: bool,
        #[command(flatten)]
        filters: FilterArgs,
    },
    Add {
        space: Uuid,
        name: String,
        #[arg(long, value_parser = parse_date)]
        start: Option<Date>,
        #[arg(long, value_parser = parse_date)]
        end: Option<Date>,
    },
    /// Change the fields given; tags given replace the current ones.
    Edit {
        space: Uuid,
        product: i64,
        /// Date the product is looked up on.
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = parse_date)]
        start: Option<Date>,
        #[arg(long, value_parser = parse_date)]
        end: Option<Date>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long = "product-tag")]
        product_tags: Vec<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        url: Option<String>,
    },
    Archive {
        space: Uuid,
        product: i64,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    Delete { space: Uuid, product: i64 },
}

#[derive(Subcommand, Debug)]
enum PeopleCommand {
    List {
        space: Uuid,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
        #[command(flatten)]
        filters: FilterArgs,
    },
    Archived {
        space: Uuid,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    /// Create a person and place them on `--product`s, or in unassigned.
    Add {
        space: Uuid,
        name: String,
        #[arg(long)]
        cdsid: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Mark as a new person.
        #[arg(long = "new")]
        new_person: bool,
        #[arg(long = "product")]
        products: Vec<i64>,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    /// Change the fields given; tags given replace the current ones.
    Edit {
        space: Uuid,
        person: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        cdsid: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long = "new")]
        new_person: Option<bool>,
    },
    Archive {
        space: Uuid,
        person: i64,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    Remove { space: Uuid, person: i64 },
}

#[derive(Subcommand, Debug)]
enum AssignCommand {
    /// Add a person to a product, keeping their other assignments.
    Add {
        space: Uuid,
        #[arg(long)]
        person: i64,
        #[arg(long)]
        product: i64,
        #[arg(long)]
        placeholder: bool,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    /// Flip the placeholder flag on one of a person's assignments.
    Placeholder {
        space: Uuid,
        #[arg(long)]
        person: i64,
        #[arg(long)]
        product: i64,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    /// Move an assignment to another product, keeping the person's others.
    Move {
        space: Uuid,
        #[arg(long)]
        assignment: i64,
        #[arg(long)]
        from: i64,
        #[arg(long)]
        to: i64,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    /// Take a person off one product.
    Unassign {
        space: Uuid,
        #[arg(long)]
        person: i64,
        #[arg(long)]
        product: i64,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    /// Delete every assignment a person has starting on a date.
    Clear {
        space: Uuid,
        #[arg(long)]
        person: i64,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    /// Dates on which assignments change.
    Dates { space: Uuid },
    /// People reassigned on a date.
    Reassigned {
        space: Uuid,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
}

#[derive(Subcommand, Debug)]
enum TagsCommand {
    List { space: Uuid, kind: TagKind },
    Add {
        space: Uuid,
        kind: TagKind,
        name: String,
        /// Color id for roles; see `peoplemover colors`.
        #[arg(long)]
        color: Option<i64>,
    },
    Edit {
        space: Uuid,
        kind: TagKind,
        id: i64,
        name: String,
        /// New color id for roles; the current color is kept otherwise.
        #[arg(long)]
        color: Option<i64>,
    },
    Delete { space: Uuid, kind: TagKind, id: i64 },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterArg {
    Location,
    ProductTag,
    Role,
    PersonTag,
}

impl From<FilterArg> for FilterType {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Location => Self::Location,
            FilterArg::ProductTag => Self::ProductTag,
            FilterArg::Role => Self::Role,
            FilterArg::PersonTag => Self::PersonTag,
        }
    }
}

#[derive(Subcommand, Debug)]
enum FiltersCommand {
    Show { space: Uuid },
    /// Replace the saved selection for one filter type.
    Set { space: Uuid, kind: FilterArg, labels: Vec<String> },
    /// Flip one option, addressed as `<id>_<name>`.
    Toggle { space: Uuid, kind: FilterArg, value: String },
    Clear { kind: Option<FilterArg> },
}

#[derive(Subcommand, Debug)]
enum TokenCommand {
    Set { token: String },
    Clear,
    Validate,
}

fn parse_date(raw: &str) -> Result<Date, String> {
    wire_date::parse(raw).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

// =============================================================================
// CONTEXT
// =============================================================================

struct CliContext {
    client: ApiClient,
    store: FileStore,
    base_url: String,
    json: bool,
}

impl CliContext {
    fn build(cli: &Cli) -> Result<Self, CliError> {
        let mut config = ClientConfig::from_env()?;
        if let Some(base_url) = &cli.base_url {
            config.base_url = normalize_base_url(base_url)?;
        }
        if let Some(dir) = &cli.state_dir {
            config.state_dir.clone_from(dir);
        }
        let store = FileStore::in_dir(&config.state_dir);
        let token = match cli.access_token.clone().or_else(|| config.access_token.clone()) {
            Some(token) => Some(token),
            None => load_access_token(&store)?,
        };
        let client = ApiClient::new(&config)?.with_access_token(token);
        Ok(Self { client, store, base_url: config.base_url, json: cli.json })
    }

    fn emit<T: serde::Serialize + ?Sized>(&self, value: &T, text: impl FnOnce() -> String) -> Result<(), CliError> {
        if self.json {
            println!("{}", render::json(value)?);
        } else {
            print!("{}", text());
        }
        Ok(())
    }

    /// Run the access check for `uuid` and load the space.
    async fn open_space(&self, uuid: Uuid) -> Result<SpaceState, CliError> {
        let run_config = self.client.run_config().await?;
        let outcome = self.client.check_space_access(run_config.auth_enabled, uuid).await;
        match outcome {
            AccessOutcome::NotFound => return Err(CliError::SpaceNotFound(uuid)),
            AccessOutcome::LoginRequired => return Err(CliError::LoginRequired),
            AccessOutcome::ReadOnly => eprintln!("note: space {uuid} is read-only for this token"),
            AccessOutcome::Granted => {}
        }
        let mut state = SpaceState::default();
        state.set_space(self.client.space(uuid).await?);
        state.apply_access(outcome);
        Ok(state)
    }

    async fn open_space_for_edit(&self, uuid: Uuid) -> Result<SpaceState, CliError> {
        let state = self.open_space(uuid).await?;
        if state.read_only {
            return Err(CliError::ReadOnly(uuid));
        }
        Ok(state)
    }

    async fn load_view(&self, uuid: Uuid, date: Date) -> Result<SpaceView, CliError> {
        let mut view = SpaceView::new(date);
        view.products = self.client.products_for_date(uuid, date).await?;
        view.people = self.client.people(uuid).await?;
        Ok(view)
    }

    /// Saved filters, with any type given on the command line replaced.
    fn active_filters(&self, overrides: FilterArgs) -> Result<ActiveFilters, CliError> {
        let mut active = ActiveFilters::from_persisted(&load_filters(&self.store)?);
        let FilterArgs { locations, product_tags, roles, person_tags } = overrides;
        for (slot, given) in [
            (&mut active.locations, locations),
            (&mut active.product_tags, product_tags),
            (&mut active.roles, roles),
            (&mut active.person_tags, person_tags),
        ] {
            if !given.is_empty() {
                *slot = given;
            }
        }
        Ok(active)
    }

    /// Tags of `kind` named in `names`; every name must exist.
    async fn named_tags(&self, uuid: Uuid, kind: TagKind, names: &[String]) -> Result<Vec<AnyTag>, CliError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let tags = self.client.tags(uuid, kind).await?;
        names
            .iter()
            .map(|name| {
                tag_by_name(&tags, name)
                    .cloned()
                    .ok_or_else(|| CliError::TagNotFound { kind: kind.label(), name: name.clone() })
            })
            .collect()
    }

    async fn tags_by_type(&self, uuid: Uuid) -> Result<TagsByType, CliError> {
        let mut tags = TagsByType::default();
        for filter_type in FilterType::ALL {
            tags.set(filter_type, self.client.tags(uuid, filter_type.tag_kind()).await?);
        }
        Ok(tags)
    }
}

// =============================================================================
// ENTRY
// =============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "failed to load .env");
        }
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error[{}]: {e}", e.error_code());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut ctx = CliContext::build(&cli)?;
    let result = dispatch(&mut ctx, cli.command).await;
    if let Err(e) = &result {
        if e.clears_token() {
            tracing::info!("clearing stored access token");
            clear_access_token(&mut ctx.store)?;
        }
    }
    result
}

async fn dispatch(ctx: &mut CliContext, command: Command) -> Result<(), CliError> {
    match command {
        Command::Ping => {
            ctx.client.run_config().await?;
            println!("ok");
            Ok(())
        }
        Command::Spaces(command) => run_spaces(ctx, command).await,
        Command::Users(command) => run_users(ctx, command).await,
        Command::Products(command) => run_products(ctx, command).await,
        Command::People(command) => run_people(ctx, command).await,
        Command::Assign(command) => run_assign(ctx, command).await,
        Command::Tags(command) => run_tags(ctx, command).await,
        Command::TimeOnProduct { space, date } => {
            ctx.open_space(space).await?;
            let date = date.unwrap_or_else(today);
            let products = ctx.client.products_for_date(space, date).await?;
            let items = generate_time_on_product_items(&products, date);
            ctx.emit(&items, || render::time_on_product(&items))
        }
        Command::History { space, person } => {
            ctx.open_space(space).await?;
            let today = today();
            let assignments = ctx.client.assignment_history(space, person).await?;
            let products = ctx.client.products_for_date(space, today).await?;
            let rows = assignment_history_rows(&assignments, &products, today);
            ctx.emit(&rows, || render::lines(&rows))
        }
        Command::Report { space, date, output } => run_report(ctx, space, date, output).await,
        Command::Import { space, file, dry_run, template: show_template } => {
            run_import(ctx, space, file, dry_run, show_template).await
        }
        Command::Filters(command) => run_filters(ctx, command).await,
        Command::Banner { close } => {
            if close {
                close_banner(&mut ctx.store)?;
                return Ok(());
            }
            let flags = Flags::from(&ctx.client.run_config().await?);
            if should_show_banner(&mut ctx.store, &flags)? {
                println!("{}", flags.announcement_banner_message);
            }
            Ok(())
        }
        Command::LoginUrl { origin } => {
            let run_config = ctx.client.run_config().await?;
            let origin = origin.unwrap_or_else(|| ctx.base_url.clone());
            println!("{}", adfs_login_url(&run_config, &origin));
            Ok(())
        }
        Command::Token(command) => run_token(ctx, command).await,
        Command::Colors => {
            let colors = ctx.client.colors().await?;
            ctx.emit(&colors, || colors.iter().map(|c| format!("{}\t{}\n", c.id, c.color)).collect())
        }
    }
}

// =============================================================================
// SPACES / USERS
// =============================================================================

async fn run_spaces(ctx: &mut CliContext, command: SpacesCommand) -> Result<(), CliError> {
    match command {
        SpacesCommand::List => {
            let spaces = ctx.client.spaces_for_user().await?;
            ctx.emit(&spaces, || render::spaces(&spaces))
        }
        SpacesCommand::Show { space } => {
            let mut state = ctx.open_space(space).await?;
            state.set_users(ctx.client.users_for_space(space).await?);
            let spaces: Vec<Space> = state.current.iter().cloned().collect();
            ctx.emit(&spaces, || format!("{}{}", render::spaces(&spaces), render::users(&state.users)))
        }
        SpacesCommand::Create { name } => {
            let name = validate_space_name(&name)?;
            let created = ctx.client.create_space(&name).await?;
            save_access_token(&mut ctx.store, &created.access_token)?;
            ctx.emit(&created.space, || render::spaces(std::slice::from_ref(&created.space)))
        }
        SpacesCommand::Rename { space, name } => {
            let name = validate_space_name(&name)?;
            let state = ctx.open_space_for_edit(space).await?;
            if let Some(current) = state.current {
                ctx.client.edit_space(&Space { name, ..current }).await?;
            }
            Ok(())
        }
        SpacesCommand::Share { space, public, private } => {
            let state = ctx.open_space_for_edit(space).await?;
            if let Some(current) = state.current {
                let today_view_is_public = public || (!private && current.today_view_is_public);
                ctx.client.edit_space(&Space { today_view_is_public, ..current }).await?;
            }
            Ok(())
        }
        SpacesCommand::Delete { space } => {
            ctx.open_space_for_edit(space).await?;
            ctx.client.delete_space(space).await?;
            Ok(())
        }
        SpacesCommand::Transfer { space, to } => {
            let mut state = ctx.open_space_for_edit(space).await?;
            state.set_users(ctx.client.users_for_space(space).await?);
            let owner = state.owner().ok_or(CliError::NoOwner)?.user_id.clone();
            ctx.client.transfer_ownership(space, &owner, &to).await?;
            Ok(())
        }
    }
}

async fn run_users(ctx: &mut CliContext, command: UsersCommand) -> Result<(), CliError> {
    match command {
        UsersCommand::List { space } => {
            let mut state = ctx.open_space(space).await?;
            state.set_users(ctx.client.users_for_space(space).await?);
            ctx.emit(&state.users, || render::users(&state.users))
        }
        UsersCommand::Invite { space, user_ids } => {
            let parsed = user_id::validate(&user_ids.join(" "));
            if !parsed.is_submittable() {
                return Err(CliError::InvalidUserIds(parsed.not_valid));
            }
            ctx.open_space_for_edit(space).await?;
            ctx.client.invite_users(space, &parsed.user_ids()).await?;
            Ok(())
        }
        UsersCommand::Remove { space, user_id } => {
            ctx.open_space_for_edit(space).await?;
            ctx.client.remove_user(space, &user_id).await?;
            Ok(())
        }
    }
}

// =============================================================================
// PRODUCTS / PEOPLE / ASSIGNMENTS
// =============================================================================

async fn run_products(ctx: &mut CliContext, command: ProductsCommand) -> Result<(), CliError> {
    match command {
        ProductsCommand::List { space, date, sort, archived, filters } => {
            ctx.open_space(space).await?;
            let date = date.unwrap_or_else(today);
            let mut view = ctx.load_view(space, date).await?;
            view.sort_by = sort;
            if archived {
                let products: Vec<Product> = view.archived_products().into_iter().cloned().collect();
                return ctx.emit(&products, || {
                    products.iter().map(|p| format!("{}\t{}\n", p.id, p.name)).collect()
                });
            }
            let active = ctx.active_filters(filters)?;
            let groups = view.grouped_products(&active);
            let products: Vec<&Product> = groups.iter().flat_map(|g| &g.products).collect();
            ctx.emit(&products, || render::product_groups(&groups, date))
        }
        ProductsCommand::Add { space, name, start, end } => {
            ctx.open_space_for_edit(space).await?;
            let product = Product {
                name: validate_product_name(&name)?,
                start_date: Some(start.unwrap_or_else(today)),
                end_date: end,
                ..empty_product(Some(space.to_string().as_str()))
            };
            let created = ctx.client.create_product(space, &product).await?;
            ctx.emit(&created, || format!("{}\t{}\n", created.id, created.name))
        }
        ProductsCommand::Edit { space, product, date, name, start, end, location, product_tags, notes, url } => {
            ctx.open_space_for_edit(space).await?;
            let products = ctx.client.products_for_date(space, date.unwrap_or_else(today)).await?;
            let mut edited =
                products.into_iter().find(|p| p.id == product).ok_or(CliError::ProductNotFound(product))?;
            if let Some(name) = name {
                edited.name = validate_product_name(&name)?;
            }
            if start.is_some() {
                edited.start_date = start;
            }
            if end.is_some() {
                edited.end_date = end;
            }
            if let Some(location) = location {
                edited.space_location =
                    ctx.named_tags(space, TagKind::Location, &[location]).await?.first().map(Tag::from);
            }
            if !product_tags.is_empty() {
                let tags = ctx.named_tags(space, TagKind::ProductTag, &product_tags).await?;
                edited.tags = tags.iter().map(Tag::from).collect();
            }
            if notes.is_some() {
                edited.notes = notes;
            }
            if url.is_some() {
                edited.url = url;
            }
            let updated = ctx.client.edit_product(space, &edited).await?;
            ctx.emit(&updated, || format!("{}\t{}\n", updated.id, updated.name))
        }
        ProductsCommand::Archive { space, product, date } => {
            ctx.open_space_for_edit(space).await?;
            let date = date.unwrap_or_else(today);
            let products = ctx.client.products_for_date(space, date).await?;
            let target = products
                .iter()
                .find(|p| p.id == product && !is_unassigned_product(p))
                .ok_or(CliError::ProductNotFound(product))?;
            archive_product_and_release(&ctx.client, space, target, &products, date).await?;
            Ok(())
        }
        ProductsCommand::Delete { space, product } => {
            ctx.open_space_for_edit(space).await?;
            ctx.client.delete_product(space, product).await?;
            Ok(())
        }
    }
}

async fn run_people(ctx: &mut CliContext, command: PeopleCommand) -> Result<(), CliError> {
    match command {
        PeopleCommand::List { space, date, filters } => {
            ctx.open_space(space).await?;
            let view = ctx.load_view(space, date.unwrap_or_else(today)).await?;
            let active = ctx.active_filters(filters)?;
            let mut people: Vec<Person> = view.filtered_people(&active).into_iter().cloned().collect();
            sort_people_by_name(&mut people);
            ctx.emit(&people, || render::people(&people.iter().collect::<Vec<_>>()))
        }
        PeopleCommand::Archived { space, date } => {
            ctx.open_space(space).await?;
            let view = ctx.load_view(space, date.unwrap_or_else(today)).await?;
            let archived = view.archived_people();
            ctx.emit(&archived, || render::people(&archived))
        }
        PeopleCommand::Add { space, name, cdsid, role, tags, notes, new_person, products, date } => {
            ctx.open_space_for_edit(space).await?;
            let date = date.unwrap_or_else(today);
            let name = validate_person_name(&name)?;
            let space_role = ctx.named_tags(space, TagKind::Role, role.as_slice()).await?.into_iter().next();
            let tags = ctx.named_tags(space, TagKind::PersonTag, &tags).await?;
            let blank = empty_person();
            let person = Person {
                name,
                space_uuid: space.to_string(),
                space_role,
                tags: tags.iter().map(Tag::from).collect(),
                notes: notes.or(blank.notes.clone()),
                new_person,
                new_person_date: Some(date),
                custom_field1: cdsid,
                ..blank
            };
            let pairs = products
                .into_iter()
                .map(|product_id| ProductPlaceholderPair { product_id, placeholder: false })
                .collect();
            let (created, placed) = create_placed_person(&ctx.client, space, &person, date, pairs).await?;
            ctx.emit(&created, || {
                let listing = render::people(&[&created]);
                format!("{listing}placed on {} product(s) from {}\n", placed.len(), wire_date::format(date))
            })
        }
        PeopleCommand::Edit { space, person, name, cdsid, role, tags, notes, new_person } => {
            ctx.open_space_for_edit(space).await?;
            let people = ctx.client.people(space).await?;
            let mut edited = people.into_iter().find(|p| p.id == person).ok_or(CliError::PersonNotFound(person))?;
            if let Some(name) = name {
                edited.name = validate_person_name(&name)?;
            }
            if cdsid.is_some() {
                edited.custom_field1 = cdsid;
            }
            if role.is_some() {
                edited.space_role = ctx.named_tags(space, TagKind::Role, role.as_slice()).await?.into_iter().next();
            }
            if !tags.is_empty() {
                edited.tags = ctx.named_tags(space, TagKind::PersonTag, &tags).await?.iter().map(Tag::from).collect();
            }
            if notes.is_some() {
                edited.notes = notes;
            }
            if let Some(new_person) = new_person {
                edited.new_person = new_person;
            }
            let updated = ctx.client.update_person(space, &edited).await?;
            ctx.emit(&updated, || render::people(&[&updated]))
        }
        PeopleCommand::Archive { space, person, date } => {
            ctx.open_space_for_edit(space).await?;
            let date = date.unwrap_or_else(today);
            let people = ctx.client.people(space).await?;
            let target = people.iter().find(|p| p.id == person).ok_or(CliError::PersonNotFound(person))?;
            if is_archived(target, date) {
                tracing::info!(person, "person already archived");
                return Ok(());
            }
            ctx.client.archive_person(space, person, date).await?;
            Ok(())
        }
        PeopleCommand::Remove { space, person } => {
            ctx.open_space_for_edit(space).await?;
            ctx.client.remove_person(space, person).await?;
            Ok(())
        }
    }
}

async fn run_assign(ctx: &mut CliContext, command: AssignCommand) -> Result<(), CliError> {
    match command {
        AssignCommand::Add { space, person, product, placeholder, date } => {
            ctx.open_space_for_edit(space).await?;
            let date = date.unwrap_or_else(today);
            let products = ctx.client.products_for_date(space, date).await?;
            if !products.iter().any(|p| p.id == product) {
                return Err(CliError::ProductNotFound(product));
            }
            let unassigned = products.iter().find(|p| is_unassigned_product(p)).map(|p| p.id);
            let to = ProductPlaceholderPair { product_id: product, placeholder };
            let placed = add_assignment(&ctx.client, space, person, date, to, unassigned).await?;
            ctx.emit(&placed, || format!("person {person} now has {} assignment(s)\n", placed.len()))
        }
        AssignCommand::Placeholder { space, person, product, date } => {
            ctx.open_space_for_edit(space).await?;
            let date = date.unwrap_or_else(today);
            let existing = ctx.client.assignments_for_person_on(space, person, date).await?;
            let pairs = toggle_placeholder(&existing, product).ok_or(CliError::NotAssigned { person, product })?;
            let placed = ctx.client.create_assignments_for_date(space, person, date, pairs).await?;
            let rows: Vec<String> =
                placed.iter().map(|a| format!("{}\tplaceholder={}", a.product_id, a.placeholder)).collect();
            ctx.emit(&placed, || render::lines(&rows))
        }
        AssignCommand::Move { space, assignment, from, to, date } => {
            if from == to {
                return Err(CliError::SameProduct(to));
            }
            ctx.open_space_for_edit(space).await?;
            let date = date.unwrap_or_else(today);
            let mut view = ctx.load_view(space, date).await?;
            let moving = view
                .products
                .iter()
                .find(|p| p.id == from)
                .and_then(|p| p.assignments.iter().find(|a| a.id == assignment))
                .cloned()
                .ok_or(CliError::AssignmentNotFound { assignment, product: from })?;
            let unassigned = view.unassigned_product().map(|p| p.id);
            if view.move_locally(assignment, from, to).is_none() {
                return Err(CliError::ProductNotFound(to));
            }
            let created = move_assignment(&ctx.client, space, date, &moving, to, unassigned).await?;
            ctx.emit(&created, || format!("moved {} to product {to}\n", moving.person.name))
        }
        AssignCommand::Unassign { space, person, product, date } => {
            ctx.open_space_for_edit(space).await?;
            let date = date.unwrap_or_else(today);
            let products = ctx.client.products_for_date(space, date).await?;
            let people = ctx.client.people(space).await?;
            let target = people.iter().find(|p| p.id == person).ok_or(CliError::PersonNotFound(person))?;
            let remaining = products_after_unassign(target, &products, product);
            let created = ctx.client.create_assignments_for_date(space, person, date, remaining).await?;
            ctx.emit(&created, || format!("{} now has {} assignment(s)\n", target.name, created.len()))
        }
        AssignCommand::Clear { space, person, date } => {
            ctx.open_space_for_edit(space).await?;
            let people = ctx.client.people(space).await?;
            let target = people.iter().find(|p| p.id == person).ok_or(CliError::PersonNotFound(person))?;
            ctx.client.delete_assignments_for_date(space, target, date.unwrap_or_else(today)).await?;
            Ok(())
        }
        AssignCommand::Dates { space } => {
            ctx.open_space(space).await?;
            let dates: Vec<String> =
                ctx.client.assignment_effective_dates(space).await?.into_iter().map(wire_date::format).collect();
            ctx.emit(&dates, || render::lines(&dates))
        }
        AssignCommand::Reassigned { space, date } => {
            ctx.open_space(space).await?;
            let date = date.unwrap_or_else(today);
            let moved = ctx.client.reassignments(space, date).await?;
            ctx.emit(&moved, || render::reassignments(&moved))
        }
    }
}

// =============================================================================
// TAGS / FILTERS
// =============================================================================

async fn run_tags(ctx: &mut CliContext, command: TagsCommand) -> Result<(), CliError> {
    match command {
        TagsCommand::List { space, kind } => {
            ctx.open_space(space).await?;
            let tags = ctx.client.tags(space, kind).await?;
            ctx.emit(&tags, || render::tags(&tags))
        }
        TagsCommand::Add { space, kind, name, color } => {
            ctx.open_space_for_edit(space).await?;
            let existing = ctx.client.tags(space, kind).await?;
            let name = validate_tag_name(&name, kind.label(), &existing, None)?;
            let created = match kind {
                TagKind::Role => ctx.client.add_role(space, &RoleRequest { id: None, name, color_id: color }).await?,
                _ => ctx.client.add_tag(space, kind, &TagRequest { id: None, name }).await?,
            };
            ctx.emit(&created, || render::tags(std::slice::from_ref(&created)))
        }
        TagsCommand::Edit { space, kind, id, name, color } => {
            ctx.open_space_for_edit(space).await?;
            let existing = ctx.client.tags(space, kind).await?;
            let name = validate_tag_name(&name, kind.label(), &existing, Some(id))?;
            let edited = ctx.client.edit_tag(space, kind, id, &name, role_color_id(&existing, id, color)).await?;
            ctx.emit(&edited, || render::tags(std::slice::from_ref(&edited)))
        }
        TagsCommand::Delete { space, kind, id } => {
            ctx.open_space_for_edit(space).await?;
            ctx.client.delete_tag(space, kind, id).await?;
            Ok(())
        }
    }
}

async fn run_filters(ctx: &mut CliContext, command: FiltersCommand) -> Result<(), CliError> {
    match command {
        FiltersCommand::Show { space } => {
            ctx.open_space(space).await?;
            let tags = ctx.tags_by_type(space).await?;
            let persisted = load_filters(&ctx.store)?;
            let groups = build_filter_groups(&tags, &persisted);
            ctx.emit(&persisted, || render::filter_groups(&groups))
        }
        FiltersCommand::Set { space, kind, labels } => {
            let filter_type = FilterType::from(kind);
            ctx.open_space(space).await?;
            let tags = ctx.client.tags(space, filter_type.tag_kind()).await?;
            let options = build_filter_options(&tags, &labels);
            for label in labels.iter().filter(|l| !options.iter().any(|o| &o.label == *l)) {
                eprintln!("note: no {} named `{label}`", filter_type.tag_type());
            }
            set_filters_by_type(&mut ctx.store, filter_type, &options)?;
            Ok(())
        }
        FiltersCommand::Toggle { space, kind, value } => {
            let filter_type = FilterType::from(kind);
            ctx.open_space(space).await?;
            let tags = ctx.tags_by_type(space).await?;
            let mut groups = build_filter_groups(&tags, &load_filters(&ctx.store)?);
            if !toggle(&mut groups, filter_type, &value) {
                eprintln!("note: no {} option `{value}`", filter_type.tag_type());
                return Ok(());
            }
            if let Some(group) = groups.iter().find(|g| g.filter_type == filter_type) {
                set_filters_by_type(&mut ctx.store, filter_type, &group.options)?;
            }
            Ok(())
        }
        FiltersCommand::Clear { kind } => {
            let types: Vec<FilterType> = match kind {
                Some(kind) => vec![kind.into()],
                None => FilterType::ALL.to_vec(),
            };
            for filter_type in types {
                set_filters_by_type(&mut ctx.store, filter_type, &[])?;
            }
            Ok(())
        }
    }
}

// =============================================================================
// REPORT / IMPORT / TOKEN
// =============================================================================

async fn run_report(ctx: &mut CliContext, space: Uuid, date: Option<Date>, output: Option<String>) -> Result<(), CliError> {
    let state = ctx.open_space(space).await?;
    let date = date.unwrap_or_else(today);
    let rows = ctx.client.people_report(space, date).await?;
    if ctx.json {
        return ctx.emit(&rows, String::new);
    }
    let csv = report_to_csv(&rows)?;
    let space_name = state.current.as_ref().map_or("peoplemover", |s| s.name.as_str());
    match output.unwrap_or_else(|| report_file_name(space_name, date)).as_str() {
        "-" => println!("{csv}"),
        path => {
            std::fs::write(path, csv).map_err(|source| CliError::Io { path: path.to_owned(), source })?;
            eprintln!("wrote {} rows to {path}", rows.len());
        }
    }
    Ok(())
}

async fn run_import(
    ctx: &mut CliContext,
    space: Uuid,
    file: Option<PathBuf>,
    dry_run: bool,
    show_template: bool,
) -> Result<(), CliError> {
    if show_template {
        let text = match ctx.client.import_template(space).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "template download failed; using built-in template");
                template()
            }
        };
        println!("{text}");
        return Ok(());
    }

    let Some(path) = file else {
        return Err(ImportError::Empty.into());
    };
    let text = std::fs::read_to_string(&path)
        .map_err(|source| CliError::Io { path: path.display().to_string(), source })?;
    let rows = parse_import(&text)?;
    if dry_run {
        return ctx.emit(&rows, || rows.iter().map(|r| format!("{}\n", r.name)).collect());
    }
    ctx.open_space_for_edit(space).await?;
    ctx.client.import_people(space, &rows).await?;
    eprintln!("imported {} people", rows.len());
    Ok(())
}

async fn run_token(ctx: &mut CliContext, command: TokenCommand) -> Result<(), CliError> {
    match command {
        TokenCommand::Set { token } => {
            save_access_token(&mut ctx.store, token.trim())?;
            eprintln!("token saved to {}", ctx.store.path().display());
            Ok(())
        }
        TokenCommand::Clear => {
            clear_access_token(&mut ctx.store)?;
            Ok(())
        }
        TokenCommand::Validate => {
            let token = ctx.client.access_token().ok_or(ApiError::MissingAccessToken)?.to_owned();
            ctx.client.validate_access_token(&token).await?;
            println!("valid");
            Ok(())
        }
    }
}
