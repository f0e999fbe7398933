use sqlb::{error::Error, values, SqlBuilder, Statement};
use sqlb_test::{execute, query_name_age, run_test};

fn all_rows(conn: &rusqlite::Connection) -> Vec<(String, i64)> {
    let mut sb = SqlBuilder::new();
    sb.table("test").select(["name", "age"]).order_by(sqlb::Order::Asc, ["id"]);

    query_name_age(conn, &sb.query_sql().unwrap(), &sb.query_params())
}

#[test]
fn test_insert() {
    run_test(|conn| {
        let mut sb = SqlBuilder::new();
        sb.table("test").insert(["name", "age"], values!["test-n", 3]);

        let (sql, params) = sb.build(Statement::Insert).unwrap();
        assert_eq!(&sql, "INSERT INTO test (name,age) VALUES (?,?)");
        assert_eq!(execute(conn, &sql, &params), 1);

        assert_eq!(all_rows(conn), vec![("test-n".to_string(), 3)]);
    });
}

#[test]
fn test_update() {
    run_test(|conn| {
        let mut sb = SqlBuilder::new();
        sb.table("test")
            .insert_all(["name", "age"], [values!["a", 1], values!["b", 2]]);
        let (sql, params) = sb.build(Statement::InsertAll).unwrap();
        execute(conn, &sql, &params);

        let mut sb = SqlBuilder::new();
        sb.table("test")
            .update(["name", "age"], values!["test2-1", 5])
            .where_cond("id", "=", 2);
        let (sql, params) = sb.build(Statement::Update).unwrap();
        assert_eq!(&sql, "UPDATE test SET name = ?,age = ? WHERE id = ?");
        assert_eq!(execute(conn, &sql, &params), 1);

        assert_eq!(
            all_rows(conn),
            vec![("a".to_string(), 1), ("test2-1".to_string(), 5)]
        );

        // No predicate updates every row
        let mut sb = SqlBuilder::new();
        sb.table("test").update(["age"], values![9]);
        let (sql, params) = sb.build(Statement::Update).unwrap();
        assert_eq!(&sql, "UPDATE test SET age = ? ");
        assert_eq!(execute(conn, &sql, &params), 2);
    });
}

#[test]
fn test_delete() {
    run_test(|conn| {
        let mut sb = SqlBuilder::new();
        sb.table("test").insert_all(
            ["name", "age"],
            [values!["a", 1], values!["b", 2], values!["c", 3]],
        );
        let (sql, params) = sb.build(Statement::InsertAll).unwrap();
        execute(conn, &sql, &params);

        let mut sb = SqlBuilder::new();
        sb.table("test").where_cond("id", "=", 1).where_or("name", "=", "c");
        let (sql, params) = sb.build(Statement::Delete).unwrap();
        assert_eq!(execute(conn, &sql, &params), 2);
        assert_eq!(all_rows(conn), vec![("b".to_string(), 2)]);

        let mut sb = SqlBuilder::new();
        sb.table("test");
        let (sql, params) = sb.build(Statement::Delete).unwrap();
        assert_eq!(&sql, "DELETE FROM test ");
        assert_eq!(execute(conn, &sql, &params), 1);
        assert!(all_rows(conn).is_empty());
    });
}

#[test]
fn test_preconditions() {
    let mut sb = SqlBuilder::new();
    sb.select(["a"]).insert(["a"], values![1]).update(["a"], values![1]);

    assert_eq!(sb.build(Statement::Query), Err(Error::TableEmpty));
    assert_eq!(sb.build(Statement::Insert), Err(Error::TableEmpty));
    assert_eq!(sb.build(Statement::Update), Err(Error::TableEmpty));
    assert_eq!(sb.build(Statement::Delete), Err(Error::TableEmpty));

    let mut sb = SqlBuilder::new();
    sb.table("test");
    assert_eq!(sb.build(Statement::Insert), Err(Error::InsertStatementEmpty));
    assert_eq!(sb.build(Statement::InsertAll), Err(Error::InsertStatementEmpty));
    assert_eq!(sb.build(Statement::Update), Err(Error::UpdateStatementEmpty));
}
