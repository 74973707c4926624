use super::*;
use clap::CommandFactory;

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn post_list_defaults_to_first_page() {
    let cli = Cli::try_parse_from(["forum-cli", "post", "list"]).unwrap();
    let Command::Post(PostCommand { command: PostSubcommand::List { page, size } }) = cli.command else {
        panic!("expected post list");
    };
    assert_eq!(page, 0);
    assert_eq!(size, DEFAULT_PAGE_SIZE);
}

#[test]
fn post_update_takes_id_and_fields() {
    let cli = Cli::try_parse_from(["forum-cli", "post", "update", "7", "--title", "t", "--body", "b"]).unwrap();
    let Command::Post(PostCommand { command: PostSubcommand::Update { id, title, body } }) = cli.command else {
        panic!("expected post update");
    };
    assert_eq!((id, title.as_str(), body.as_str()), (7, "t", "b"));
}

#[test]
fn login_requires_credentials() {
    assert!(Cli::try_parse_from(["forum-cli", "login", "--username", "kim"]).is_err());
}
