//! Facade behaviour against a mocked API.

use super::*;
use crate::api::MockTicketsApi;
use mockall::predicate::eq;
use rstest::rstest;
use ticket_models::UserName;

fn ticket(id: u64, description: &str, completed: bool) -> Ticket {
    Ticket::from_parts(
        TicketId::new(id),
        TicketDescription::new(description).expect("valid description"),
        None,
        completed,
    )
}

fn seed() -> Vec<Ticket> {
    vec![
        ticket(1, "Install a monitor arm", false),
        ticket(2, "Move the desk", true),
        ticket(3, "Order keyboards", false),
    ]
}

fn unprocessable() -> ClientError {
    ClientError::from_status(
        422,
        br#"{"code":"unprocessable_entity","message":"user 42 does not exist"}"#,
    )
}

fn request(description: &str, assignee: Option<u64>) -> NewTicketRequest {
    NewTicketRequest {
        description: TicketDescription::new(description).expect("valid description"),
        assignee: assignee.map(UserId::new),
    }
}

#[rstest]
#[case(StatusFilter::All, vec![1, 2, 3])]
#[case(StatusFilter::Open, vec![1, 3])]
#[case(StatusFilter::Completed, vec![2])]
#[tokio::test]
async fn ticket_lists_are_filtered_client_side(
    #[case] filter: StatusFilter,
    #[case] expected: Vec<u64>,
) {
    let mut api = MockTicketsApi::new();
    api.expect_get_tickets().times(1).returning(|_| Ok(seed()));
    let queries = Queries::new(api);

    let tickets = queries
        .tickets(filter, &RequestOptions::default())
        .await
        .expect("tickets");
    let ids: Vec<u64> = tickets.iter().map(|ticket| ticket.id().get()).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn each_filter_caches_under_its_own_key() {
    let mut api = MockTicketsApi::new();
    api.expect_get_tickets().times(2).returning(|_| Ok(seed()));
    let queries = Queries::new(api);
    let options = RequestOptions::default();

    for filter in [StatusFilter::Open, StatusFilter::Completed, StatusFilter::Open] {
        queries.tickets(filter, &options).await.expect("tickets");
    }
    assert_eq!(queries.cache().len().await, 2);
}

#[tokio::test]
async fn failed_mutation_still_invalidates_ticket_reads() {
    let mut api = MockTicketsApi::new();
    api.expect_get_tickets().times(2).returning(|_| Ok(seed()));
    api.expect_get_users().times(1).returning(|_| {
        Ok(vec![User::new(
            UserId::new(1),
            UserName::new("Alice").expect("valid name"),
        )])
    });
    api.expect_mark_ticket_as_complete()
        .with(eq(TicketId::new(99)), mockall::predicate::always())
        .times(1)
        .returning(|_, _| Err(unprocessable()));
    let queries = Queries::new(api);
    let options = RequestOptions::default();

    queries.tickets(StatusFilter::All, &options).await.expect("tickets");
    queries.users(&options).await.expect("users");

    let error = queries
        .set_completed(TicketId::new(99), true, &options)
        .await
        .expect_err("unknown ticket");
    assert_eq!(error.status(), Some(422));
    assert!(!queries
        .cache()
        .contains(&QueryKey::ticket_list(StatusFilter::All))
        .await);
    assert!(queries.cache().contains(&QueryKey::user_list()).await);

    queries.tickets(StatusFilter::All, &options).await.expect("refetch");
}

#[tokio::test]
async fn reopening_calls_the_incomplete_endpoint() {
    let mut api = MockTicketsApi::new();
    api.expect_mark_ticket_as_incomplete()
        .with(eq(TicketId::new(5)), mockall::predicate::always())
        .times(1)
        .returning(|_, _| Ok(()));
    let queries = Queries::new(api);

    queries
        .set_completed(TicketId::new(5), false, &RequestOptions::default())
        .await
        .expect("reopened");
}

#[rstest]
#[case(Some(2))]
#[case(None)]
#[tokio::test]
async fn change_assignee_picks_the_endpoint(#[case] assignee: Option<u64>) {
    let mut api = MockTicketsApi::new();
    match assignee {
        Some(user) => {
            api.expect_assign_user_to_ticket()
                .with(
                    eq(TicketId::new(4)),
                    eq(UserId::new(user)),
                    mockall::predicate::always(),
                )
                .times(1)
                .returning(|_, _, _| Ok(()));
        }
        None => {
            api.expect_unassign_user_from_ticket()
                .with(eq(TicketId::new(4)), mockall::predicate::always())
                .times(1)
                .returning(|_, _| Ok(()));
        }
    }
    let queries = Queries::new(api);

    queries
        .change_assignee(
            TicketId::new(4),
            assignee.map(UserId::new),
            &RequestOptions::default(),
        )
        .await
        .expect("assignee changed");
}

#[tokio::test]
async fn create_without_assignee_makes_one_call() {
    let mut api = MockTicketsApi::new();
    api.expect_create_ticket()
        .withf(|description, _| description == "Fix the lamp")
        .times(1)
        .returning(|_, _| Ok(ticket(21, "Fix the lamp", false)));
    let queries = Queries::new(api);

    let created = queries
        .create_ticket(&request("Fix the lamp", None), &RequestOptions::default())
        .await
        .expect("created");
    assert_eq!(created.id(), TicketId::new(21));
    assert_eq!(created.assignee_id(), None);
}

#[tokio::test]
async fn create_with_assignee_assigns_the_new_ticket() {
    let mut api = MockTicketsApi::new();
    api.expect_create_ticket()
        .times(1)
        .returning(|_, _| Ok(ticket(21, "Fix the lamp", false)));
    api.expect_assign_user_to_ticket()
        .with(
            eq(TicketId::new(21)),
            eq(UserId::new(3)),
            mockall::predicate::always(),
        )
        .times(1)
        .returning(|_, _, _| Ok(()));
    let queries = Queries::new(api);

    let created = queries
        .create_ticket(&request("Fix the lamp", Some(3)), &RequestOptions::default())
        .await
        .expect("created");
    assert_eq!(created.assignee_id(), Some(UserId::new(3)));
}

#[tokio::test]
async fn failed_assignment_after_create_returns_the_assignment_error() {
    let mut api = MockTicketsApi::new();
    api.expect_get_tickets().times(1).returning(|_| Ok(seed()));
    api.expect_create_ticket()
        .times(1)
        .returning(|_, _| Ok(ticket(21, "Fix the lamp", false)));
    api.expect_assign_user_to_ticket()
        .times(1)
        .returning(|_, _, _| Err(unprocessable()));
    let queries = Queries::new(api);
    let options = RequestOptions::default();

    queries.tickets(StatusFilter::All, &options).await.expect("tickets");
    let error = queries
        .create_ticket(&request("Fix the lamp", Some(42)), &options)
        .await
        .expect_err("assignment failed");

    assert_eq!(error.status(), Some(422));
    assert!(queries.cache().is_empty().await);
}

#[tokio::test]
async fn user_details_fetch_a_single_user() {
    let mut api = MockTicketsApi::new();
    api.expect_get_user_by_id()
        .with(eq(UserId::new(2)), mockall::predicate::always())
        .times(1)
        .returning(|id, _| Ok(User::new(id, UserName::new("Bob").expect("valid name"))));
    let queries = Queries::new(api);
    let options = RequestOptions::default();

    for _ in 0..2 {
        let user = queries.user(UserId::new(2), &options).await.expect("user");
        assert_eq!(user.name().as_str(), "Bob");
    }
}

#[tokio::test]
async fn cancelled_reads_are_not_cached() {
    let mut api = MockTicketsApi::new();
    api.expect_get_ticket_by_id()
        .times(1)
        .returning(|_, _| Err(ClientError::Cancelled));
    let queries = Queries::new(api);

    let error = queries
        .ticket(TicketId::new(4), &RequestOptions::default())
        .await
        .expect_err("cancelled");
    assert!(error.is_cancelled());
    assert!(queries.cache().is_empty().await);
}
