mod errors;
mod tests;

pub mod ast;
pub mod expr;
pub mod stmt;
pub mod operator;

pub use errors::{ParserError, ParserErrorKind};

use std::rc::Rc;
use crate::language::{self, IntType};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::runtime::strings::StringSymbol;

use ast::Program;
use expr::{Expr, IfExpr, FunctionLiteral};
use stmt::{Stmt, Block};
use operator::{PrefixOp, InfixOp, Precedence, PRECEDENCE_START, PRECEDENCE_END};
use errors::ErrorKind;


// Recursive descent parser

pub struct Parser<'s> {
    lexer: Lexer<'s>,
    next: Token,
}

type InternalResult<T> = Result<T, ParserError>;

impl<'s> Parser<'s> {

    pub fn new(source: &'s str) -> Self {
        let mut lexer = Lexer::new(source);
        let next = lexer.next_token();
        Parser { lexer, next }
    }

    fn peek(&self) -> &Token { &self.next }

    fn peek_kind(&self) -> TokenKind { self.next.kind }

    // the lexer repeats EOF, so there is always a next token
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.next, next)
    }

    fn advance_if(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> InternalResult<Token> {
        if self.peek_kind() == kind {
            Ok(self.advance())
        } else {
            Err(ParserError::unexpected(self.peek(), expected))
        }
    }

    fn expect_identifier(&mut self) -> InternalResult<StringSymbol> {
        let token = self.expect(TokenKind::Identifier, "identifier")?;
        Ok(StringSymbol::intern(&token.text))
    }

    /// Parse the whole source. Parsing stops at the first syntax error.
    pub fn parse_program(mut self) -> InternalResult<Program> {
        let mut statements = Vec::new();
        while !self.peek().is_eof() {
            statements.push(self.parse_stmt()?);
        }

        log::trace!("parsed {} top-level statements", statements.len());
        Ok(Program::new(statements))
    }

    /*** Statement Parsing ***/

    /*
        statement ::= "let" IDENT "=" expression ";"?
                    | "return" expression? ";"?
                    | "while" "(" expression ")" block
                    | expression ";"? ;
    */
    fn parse_stmt(&mut self) -> InternalResult<Stmt> {
        let stmt = match self.peek_kind() {
            TokenKind::Let => {
                self.advance();

                let name = self.expect_identifier()?;
                self.expect(TokenKind::OpAssign, "'='")?;
                let value = self.parse_expr()?;

                Stmt::Let { name, value }
            },

            TokenKind::Return => {
                self.advance();

                let value = match self.peek_kind() {
                    TokenKind::Semicolon | TokenKind::CloseBrace | TokenKind::EOF => None,
                    _ => Some(self.parse_expr()?),
                };

                Stmt::Return(value)
            },

            TokenKind::While => {
                self.advance();

                let condition = self.parse_condition()?;
                let body = self.parse_block()?;

                // no trailing semicolon needed after a block
                return Ok(Stmt::While { condition, body });
            },

            _ => Stmt::Expression(self.parse_expr()?),
        };

        self.advance_if(TokenKind::Semicolon);
        Ok(stmt)
    }

    // block ::= "{" statement* "}" ;
    fn parse_block(&mut self) -> InternalResult<Block> {
        self.expect(TokenKind::OpenBrace, "'{'")?;

        let mut statements = Vec::new();
        while !self.advance_if(TokenKind::CloseBrace) {
            if self.peek().is_eof() {
                return Err(ParserError::unexpected(self.peek(), "'}'"));
            }
            let stmt = stacker::maybe_grow(language::STACK_RED_ZONE, language::STACK_GROW_SIZE, || {
                self.parse_stmt()
            })?;
            statements.push(stmt);
        }

        Ok(Block::new(statements))
    }

    // "(" expression ")"
    fn parse_condition(&mut self) -> InternalResult<Expr> {
        self.expect(TokenKind::OpenParen, "'('")?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::CloseParen, "')'")?;
        Ok(condition)
    }

    /*** Expression Parsing ***/

    fn parse_expr(&mut self) -> InternalResult<Expr> {
        // deeply nested source should not overflow the native stack
        stacker::maybe_grow(language::STACK_RED_ZONE, language::STACK_GROW_SIZE, || {
            self.parse_infix_expr(PRECEDENCE_START)  // the top of the recursive descent stack for expressions
        })
    }

    /*
        Infix operator syntax:

        operand[0] ::= unary ;
        operand[N] ::= operand[N-1] ( OPERATOR[N] operand[N-1] )* ;
    */
    fn parse_infix_expr(&mut self, level: Precedence) -> InternalResult<Expr> {
        if level == PRECEDENCE_END {
            return self.parse_unary_expr();  // exit infix precedence recursion
        }

        let mut expr = self.parse_infix_expr(level - 1)?;

        loop {
            let infix_op = match InfixOp::from_token(self.peek_kind()) {
                Some(infix_op) if infix_op.precedence_level() == level => infix_op,
                _ => break,
            };

            self.advance(); // consume infix_op token

            let rhs_expr = self.parse_infix_expr(level - 1)?;
            expr = Expr::Infix(infix_op, Box::new((expr, rhs_expr)));
        }

        Ok(expr)
    }

    /*
        Prefix operator syntax:

        unary ::= ( "!" | "-" ) unary | postfix ;
    */
    fn parse_unary_expr(&mut self) -> InternalResult<Expr> {
        if let Some(prefix_op) = PrefixOp::from_token(self.peek_kind()) {
            self.advance(); // consume prefix_op token

            let operand = stacker::maybe_grow(language::STACK_RED_ZONE, language::STACK_GROW_SIZE, || {
                self.parse_unary_expr()
            })?;

            return Ok(Expr::Prefix(prefix_op, Box::new(operand)));
        }

        self.parse_postfix_expr()
    }

    /*
        Postfix expression syntax:

        postfix ::= primary ( invocation | subscript )* ;
        invocation ::= "(" ( expression ( "," expression )* )? ")" ;
        subscript ::= "[" expression "]" ;
    */
    fn parse_postfix_expr(&mut self) -> InternalResult<Expr> {
        let mut expr = self.parse_primary_expr()?;

        loop {
            match self.peek_kind() {
                TokenKind::OpenParen => {
                    self.advance();
                    let args = self.parse_expr_list(TokenKind::CloseParen, "')'")?;

                    expr = Expr::Call {
                        callee: Box::new(expr),
                        args: args.into_boxed_slice(),
                    };
                },

                TokenKind::OpenSquare => {
                    self.advance();
                    let index = self.parse_expr()?;
                    self.expect(TokenKind::CloseSquare, "']'")?;

                    expr = Expr::Index(Box::new((expr, index)));
                },

                _ => break,
            }
        }

        Ok(expr)
    }

    // comma separated expressions, consuming the closing delimiter
    fn parse_expr_list(&mut self, close: TokenKind, expected: &'static str) -> InternalResult<Vec<Expr>> {
        let mut items = Vec::new();
        if self.advance_if(close) {
            return Ok(items);
        }

        loop {
            items.push(self.parse_expr()?);

            if self.advance_if(TokenKind::Comma) {
                continue;
            }
            self.expect(close, expected)?;
            break;
        }

        Ok(items)
    }

    /*
        Here we parse everything that can be immediately identified from the next token.

        primary ::= INTEGER | STRING | "true" | "false" | IDENTIFIER | "(" expression ")"
                  | if-expression | function-literal | array-literal | hash-literal ;
    */
    fn parse_primary_expr(&mut self) -> InternalResult<Expr> {
        let expr = match self.peek_kind() {
            TokenKind::Identifier => {
                let token = self.advance();
                Expr::Identifier(StringSymbol::intern(&token.text))
            },

            TokenKind::IntegerLiteral => {
                let token = self.advance();
                let value = token.text.parse::<IntType>()
                    .map_err(|_| ParserError::new(ErrorKind::InvalidIntegerLiteral(token.text.clone()), token.span))?;
                Expr::IntegerLiteral(value)
            },

            TokenKind::StringLiteral => {
                let token = self.advance();
                Expr::StringLiteral(Rc::from(token.text))
            },

            TokenKind::True => {
                self.advance();
                Expr::Boolean(true)
            },

            TokenKind::False => {
                self.advance();
                Expr::Boolean(false)
            },

            TokenKind::OpenParen => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(TokenKind::CloseParen, "')'")?;
                expr
            },

            TokenKind::If => Expr::If(Box::new(self.parse_if_expr()?)),

            TokenKind::Function => Expr::Function(Rc::new(self.parse_function_literal()?)),

            TokenKind::OpenSquare => {
                self.advance();
                let items = self.parse_expr_list(TokenKind::CloseSquare, "']'")?;
                Expr::Array(items.into_boxed_slice())
            },

            TokenKind::OpenBrace => self.parse_hash_literal()?,

            _ => return Err(ParserError::unexpected(self.peek(), "expression")),
        };

        Ok(expr)
    }

    /*
        If expression syntax:

        if-expression ::= "if" "(" expression ")" block ( "else" ( block | if-expression ) )? ;
    */
    fn parse_if_expr(&mut self) -> InternalResult<IfExpr> {
        self.expect(TokenKind::If, "'if'")?;

        let condition = self.parse_condition()?;
        let consequence = self.parse_block()?;

        let mut alternative = None;
        if self.advance_if(TokenKind::Else) {
            let block = if self.peek_kind() == TokenKind::If {
                Block::from(self.parse_if_expr()?)
            } else {
                self.parse_block()?
            };
            alternative.replace(block);
        }

        Ok(IfExpr::new(condition, consequence, alternative))
    }

    /*
        Function literal syntax:

        function-literal ::= "fn" "(" ( IDENTIFIER ( "," IDENTIFIER )* )? ")" block ;
    */
    fn parse_function_literal(&mut self) -> InternalResult<FunctionLiteral> {
        self.expect(TokenKind::Function, "'fn'")?;
        self.expect(TokenKind::OpenParen, "'('")?;

        let mut params = Vec::new();
        if !self.advance_if(TokenKind::CloseParen) {
            loop {
                params.push(self.expect_identifier()?);

                if self.advance_if(TokenKind::Comma) {
                    continue;
                }
                self.expect(TokenKind::CloseParen, "')'")?;
                break;
            }
        }

        let body = self.parse_block()?;
        Ok(FunctionLiteral::new(params, body))
    }

    /*
        Hash literal syntax:

        hash-literal ::= "{" ( expression ":" expression ( "," expression ":" expression )* )? "}" ;
    */
    fn parse_hash_literal(&mut self) -> InternalResult<Expr> {
        self.expect(TokenKind::OpenBrace, "'{'")?;

        let mut pairs = Vec::new();
        if !self.advance_if(TokenKind::CloseBrace) {
            loop {
                let key = self.parse_expr()?;
                self.expect(TokenKind::Colon, "':'")?;
                let value = self.parse_expr()?;
                pairs.push((key, value));

                if self.advance_if(TokenKind::Comma) {
                    continue;
                }
                self.expect(TokenKind::CloseBrace, "'}'")?;
                break;
            }
        }

        Ok(Expr::Hash(pairs.into_boxed_slice()))
    }
}
