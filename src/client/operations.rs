//! GraphQL documents sent by the client

pub const CREATE_USER: &str = r#"
mutation CreateUser($input: CreateUserInput!) {
  createUser(input: $input) {
    token
    user { id name email }
  }
}
"#;

pub const LOGIN_USER: &str = r#"
mutation LoginUser($email: String!, $password: String!) {
  loginUser(email: $email, password: $password) {
    token
    user { id name email }
  }
}
"#;

pub const ME: &str = r#"
query Me {
  me { id name email }
}
"#;

pub const GET_USERS: &str = r#"
query GetUsers {
  getUsers { id name email }
}
"#;

pub const GET_USER_BY_ID: &str = r#"
query GetUserById($id: ID!) {
  getUserById(id: $id) { id name email }
}
"#;

pub const GET_BOOKS: &str = r#"
query GetBooks {
  getBooks {
    id title author year genre image description language enterTime
  }
}
"#;

pub const GET_BOOK_BY_ID: &str = r#"
query GetBookById($id: ID!) {
  getBookById(id: $id) {
    id title author year genre image description language enterTime
  }
}
"#;

pub const CREATE_BOOK: &str = r#"
mutation CreateBook($input: CreateBookInput!) {
  createBook(input: $input) {
    id title author year genre image description language enterTime
  }
}
"#;

pub const UPDATE_BOOK: &str = r#"
mutation UpdateBook($id: ID!, $input: UpdateBookInput!) {
  updateBook(id: $id, input: $input) {
    id title author year genre image description language enterTime
  }
}
"#;

pub const DELETE_BOOK: &str = r#"
mutation DeleteBook($id: ID!) {
  deleteBook(id: $id) {
    id title author year genre image description language enterTime
  }
}
"#;
