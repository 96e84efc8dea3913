mod common;

use backend::repos::credentials::{find_by_email_and_role, RoleCredential};
use backend::Role;
use backend_test_support::unique_helpers::unique_email;
use common::{seed_admin, seed_aluno, seed_professor, test_state};

#[actix_web::test]
async fn finds_an_active_admin_by_email() {
    let state = test_state().await;
    let db = state.db().unwrap();
    let email = unique_email("admin");
    let id = seed_admin(db, "Ana Dias", &email, "senha-admin", true).await;

    let record = find_by_email_and_role(db, &email, Role::Admin)
        .await
        .unwrap()
        .expect("admin should be found");

    assert_eq!(record.id, id);
    assert_eq!(record.name, "Ana Dias");
    assert_eq!(record.email, email);
    assert_eq!(record.role(), Role::Admin);
    assert!(matches!(record.credential, RoleCredential::Admin { .. }));
}

#[actix_web::test]
async fn lookup_is_scoped_to_the_requested_role() {
    let state = test_state().await;
    let db = state.db().unwrap();
    let email = unique_email("prof");
    seed_professor(db, "Marta Lima", &email, "senha-prof", Some(7), true).await;

    // The same email queried as admin hits a different table: not found.
    assert!(find_by_email_and_role(db, &email, Role::Admin)
        .await
        .unwrap()
        .is_none());

    let record = find_by_email_and_role(db, &email, Role::Professor)
        .await
        .unwrap()
        .expect("professor should be found");
    assert_eq!(record.discipline_id(), Some(7));
}

#[actix_web::test]
async fn inactive_accounts_read_as_not_found() {
    let state = test_state().await;
    let db = state.db().unwrap();

    let admin_email = unique_email("admin");
    seed_admin(db, "Inativo", &admin_email, "senha-admin", false).await;
    assert!(find_by_email_and_role(db, &admin_email, Role::Admin)
        .await
        .unwrap()
        .is_none());

    let prof_email = unique_email("prof");
    seed_professor(db, "Inativa", &prof_email, "senha-prof", None, false).await;
    assert!(find_by_email_and_role(db, &prof_email, Role::Professor)
        .await
        .unwrap()
        .is_none());
}

#[actix_web::test]
async fn aluno_requires_both_active_account_and_active_enrollment() {
    let state = test_state().await;
    let db = state.db().unwrap();

    let cases = [
        (true, true, true),
        (true, false, false),
        (false, true, false),
        (false, false, false),
    ];

    for (account_active, enrollment_active, expect_found) in cases {
        let email = unique_email("aluno");
        seed_aluno(
            db,
            "Pedro Souza",
            &email,
            account_active,
            &format!("m-{account_active}-{enrollment_active}"),
            enrollment_active,
        )
        .await;

        let found = find_by_email_and_role(db, &email, Role::Aluno)
            .await
            .unwrap();
        assert_eq!(
            found.is_some(),
            expect_found,
            "account_active={account_active} enrollment_active={enrollment_active}"
        );
    }
}

#[actix_web::test]
async fn aluno_record_carries_the_enrollment_number() {
    let state = test_state().await;
    let db = state.db().unwrap();
    let email = unique_email("aluno");
    seed_aluno(db, "Pedro Souza", &email, true, "2024010042", true).await;

    let record = find_by_email_and_role(db, &email, Role::Aluno)
        .await
        .unwrap()
        .expect("aluno should be found");

    assert_eq!(record.enrollment_number(), Some("2024010042"));
    assert_eq!(record.role(), Role::Aluno);
    // Alunos have no password hash anywhere in the record.
    assert!(matches!(record.credential, RoleCredential::Aluno { .. }));
}

#[actix_web::test]
async fn unknown_email_is_none_for_every_role() {
    let state = test_state().await;
    let db = state.db().unwrap();
    let email = unique_email("ghost");

    for role in [Role::Admin, Role::Professor, Role::Aluno] {
        assert!(find_by_email_and_role(db, &email, role)
            .await
            .unwrap()
            .is_none());
    }
}
