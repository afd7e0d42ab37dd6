use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(error = ())] // Use unit type for error
pub enum TokenKind {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//.*", allow_greedy = true)]
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    Comment,

    // Literals
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r#"'([^'\\\n]|\\.)*'"#)]
    String,
    /// Opening backtick; [`crate::syntax::Lexer`] scans the rest of the
    /// template and never yields this kind.
    #[token("`")]
    Backtick,
    /// Template without substitutions, `` `text` ``.
    Template,
    /// `` `text${ ``
    TemplateHead,
    /// `` }text${ ``
    TemplateMiddle,
    /// `` }text` ``
    TemplateTail,
    /// `/body/flags`, only produced where an expression may start.
    Regex,
    #[regex(r"[0-9][0-9a-zA-Z_]*(\.[0-9][0-9a-zA-Z_]*)?")]
    Number,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("?.")]
    QuestionDot,
    #[token("...")]
    Ellipsis,
    #[token("?")]
    Question,
    #[token("=>")]
    FatArrow,
    #[token("=")]
    Equal,

    // Everything else that only separates expressions.
    #[token("==")]
    #[token("===")]
    #[token("!=")]
    #[token("!==")]
    #[token("<")]
    #[token(">")]
    #[token("<=")]
    #[token(">=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("**")]
    #[token("/")]
    #[token("%")]
    #[token("++")]
    #[token("--")]
    #[token("<<")]
    #[token(">>")]
    #[token(">>>")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("!")]
    #[token("~")]
    #[token("&&")]
    #[token("||")]
    #[token("??")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("&&=")]
    #[token("||=")]
    #[token("??=")]
    #[token("@")]
    #[token("#")]
    Operator,

    // Declaration keywords
    #[token("let")]
    KwLet,
    #[token("const")]
    KwConst,
    #[token("var")]
    KwVar,
    #[token("function")]
    KwFunction,
    #[token("class")]
    KwClass,
    #[token("interface")]
    KwInterface,
    #[token("type")]
    KwType,
    #[token("enum")]
    KwEnum,
    #[token("namespace")]
    KwNamespace,
    #[token("import")]
    KwImport,
    #[token("from")]
    KwFrom,
    #[token("as")]
    KwAs,
    #[token("catch")]
    KwCatch,
    #[token("for")]
    KwFor,
    #[token("of")]
    KwOf,
    #[token("in")]
    KwIn,
    #[token("return")]
    KwReturn,
    #[token("extends")]
    KwExtends,
    #[token("implements")]
    KwImplements,

    // Remaining reserved words never name a symbol.
    #[token("async")]
    #[token("await")]
    #[token("break")]
    #[token("case")]
    #[token("continue")]
    #[token("debugger")]
    #[token("default")]
    #[token("delete")]
    #[token("do")]
    #[token("else")]
    #[token("export")]
    #[token("false")]
    #[token("finally")]
    #[token("if")]
    #[token("instanceof")]
    #[token("new")]
    #[token("null")]
    #[token("private")]
    #[token("protected")]
    #[token("public")]
    #[token("readonly")]
    #[token("static")]
    #[token("super")]
    #[token("switch")]
    #[token("this")]
    #[token("throw")]
    #[token("true")]
    #[token("try")]
    #[token("typeof")]
    #[token("undefined")]
    #[token("void")]
    #[token("while")]
    #[token("with")]
    #[token("yield")]
    Keyword,

    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}$]*")]
    Ident,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Keywords that begin a new statement when seen at declarator level.
    pub fn starts_statement(self) -> bool {
        matches!(
            self,
            TokenKind::KwLet
                | TokenKind::KwConst
                | TokenKind::KwVar
                | TokenKind::KwFunction
                | TokenKind::KwClass
                | TokenKind::KwInterface
                | TokenKind::KwEnum
                | TokenKind::KwNamespace
                | TokenKind::KwImport
                | TokenKind::KwFor
                | TokenKind::KwReturn
        )
    }

    /// Identifiers and every keyword; after `.` any of these names a member.
    pub fn is_word(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Keyword) || self.is_declaration_keyword()
    }

    /// Words the grammar only treats as keywords in specific positions.
    pub fn is_contextual(self) -> bool {
        matches!(
            self,
            TokenKind::KwType | TokenKind::KwNamespace | TokenKind::KwFrom | TokenKind::KwAs | TokenKind::KwOf
        )
    }

    fn is_declaration_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KwLet
                | TokenKind::KwConst
                | TokenKind::KwVar
                | TokenKind::KwFunction
                | TokenKind::KwClass
                | TokenKind::KwInterface
                | TokenKind::KwType
                | TokenKind::KwEnum
                | TokenKind::KwNamespace
                | TokenKind::KwImport
                | TokenKind::KwFrom
                | TokenKind::KwAs
                | TokenKind::KwCatch
                | TokenKind::KwFor
                | TokenKind::KwOf
                | TokenKind::KwIn
                | TokenKind::KwReturn
                | TokenKind::KwExtends
                | TokenKind::KwImplements
        )
    }

    /// String-like literals, including every template chunk.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::Template
                | TokenKind::TemplateHead
                | TokenKind::TemplateMiddle
                | TokenKind::TemplateTail
                | TokenKind::Regex
        )
    }

    pub fn is_open(self) -> bool {
        matches!(self, TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket)
    }

    pub fn is_close(self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket)
    }
}
